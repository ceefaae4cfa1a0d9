//! Test-only fixtures: the literal segment notation used throughout the worked
//! scenarios (`"<ia> <egress>><ingress> <ia> <egress>><ingress> <ia> ..."`), plus
//! minimal concrete ACL/sequence policies sufficient to reproduce them. The core
//! filter module keeps `AclPolicy`/`SequencePolicy` opaque; these are fixtures, not
//! a shipped policy engine.
#![cfg(test)]

use crate::filter::{AclPolicy, SequencePolicy};
use crate::models::{Ia, Interface, Segment};
use itertools::Itertools;
use regex::Regex;

pub(crate) fn parse_segment(s: &str) -> Segment {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    assert!(
        !tokens.is_empty() && tokens.len() % 2 == 1,
        "fixture must be IA (hop IA)*: {s}"
    );

    let mut ias = Vec::new();
    let mut hops = Vec::new();
    ias.push(tokens[0].parse::<Ia>().unwrap());
    let mut i = 1;
    while i < tokens.len() {
        let (a, b) = tokens[i].split_once('>').unwrap();
        hops.push((a.parse::<u64>().unwrap(), b.parse::<u64>().unwrap()));
        ias.push(tokens[i + 1].parse::<Ia>().unwrap());
        i += 2;
    }

    let n = ias.len();
    let mut interfaces = Vec::with_capacity(2 * (n - 1));
    for (k, ia) in ias.iter().enumerate() {
        if k == 0 {
            interfaces.push(Interface::new(hops[0].0, *ia));
        } else if k == n - 1 {
            interfaces.push(Interface::new(hops[k - 1].1, *ia));
        } else {
            interfaces.push(Interface::new(hops[k - 1].1, *ia));
            interfaces.push(Interface::new(hops[k].0, *ia));
        }
    }
    Segment::literal(interfaces).unwrap()
}

/// Ordered rule list of `(allow, isd)`, `None` acting as a catch-all. An interface
/// sequence is accepted iff every interface's first matching rule allows it.
pub(crate) struct SimpleAcl {
    rules: Vec<(bool, Option<u16>)>,
}

impl SimpleAcl {
    /// Parses rules like `"- 19"` (deny ISD 19) or `"+"` (allow everything else).
    pub(crate) fn new(rules: &[&str]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                let mut parts = rule.split_whitespace();
                let allow = match parts.next().expect("rule must have an action") {
                    "+" => true,
                    "-" => false,
                    other => panic!("unknown ACL action: {other}"),
                };
                let isd = parts
                    .next()
                    .map(|s| s.parse::<u16>().expect("ISD must be numeric"));
                (allow, isd)
            })
            .collect();
        SimpleAcl { rules }
    }
}

impl AclPolicy for SimpleAcl {
    fn accept(&self, interfaces: &[Interface]) -> bool {
        interfaces.iter().all(|iface| {
            for (allow, isd) in &self.rules {
                if isd.is_none() || *isd == Some(iface.ia.isd()) {
                    return *allow;
                }
            }
            false
        })
    }
}

/// Matches a hop sequence against a regex over its ISD runs: expand to distinct
/// consecutive ASes, collapse adjacent same-ISD entries into maximal runs, render
/// the runs as a space-joined string, and match it whole against the pattern.
pub(crate) struct SimpleSequence {
    regex: Regex,
}

impl SimpleSequence {
    /// Builds a policy from a pattern like `"17* 19*"`. Each token's leading digit
    /// run is the ISD for one run; a trailing `*` is accepted but redundant here,
    /// since a run already stands for "any AS within this ISD, any count".
    pub(crate) fn new(pattern: &str) -> Self {
        let isds: Vec<&str> = pattern
            .split_whitespace()
            .map(|tok| tok.trim_end_matches('*'))
            .collect();
        let anchored = format!("^{}$", isds.join(" "));
        let regex = Regex::new(&anchored).expect("pattern must compile to a valid regex");
        SimpleSequence { regex }
    }
}

impl SequencePolicy for SimpleSequence {
    fn accept(&self, interfaces: &[Interface]) -> bool {
        let ases: Vec<Ia> = interfaces.iter().map(|i| i.ia).dedup().collect();
        let runs: Vec<String> = ases
            .into_iter()
            .map(|ia| ia.isd())
            .coalesce(|a, b| if a == b { Ok(a) } else { Err((a, b)) })
            .map(|isd| isd.to_string())
            .collect();
        self.regex.is_match(&runs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hop_fixture_has_two_interfaces() {
        let seg = parse_segment("19-ffaa:0:1303 1>1 19-ffaa:0:1302");
        assert_eq!(seg.path_interfaces().len(), 2);
    }

    #[test]
    fn three_hop_fixture_has_four_interfaces() {
        let seg = parse_segment("17-ffaa:0:1108 2>1 17-ffaa:0:1102 2>1 17-ffaa:0:1107");
        assert_eq!(seg.path_interfaces().len(), 4);
    }

    #[test]
    fn acl_denies_anything_touching_the_named_isd() {
        let acl = SimpleAcl::new(&["- 19", "+"]);
        let denied = parse_segment("19-ffaa:0:1303 1>1 19-ffaa:0:1302");
        let allowed = parse_segment("17-ffaa:0:1108 2>1 17-ffaa:0:1102 2>1 17-ffaa:0:1107");
        assert!(!acl.accept(&denied.path_interfaces()));
        assert!(acl.accept(&allowed.path_interfaces()));
    }

    #[test]
    fn sequence_rejects_runs_in_the_wrong_order() {
        // Hops are ISD 19 then ISD 17; the pattern demands 17 then 19.
        let seq = SimpleSequence::new("17* 19*");
        let path = parse_segment(
            "19-ffaa:0:1303 1>1 19-ffaa:0:1302 2>1 17-ffaa:0:1108 2>1 17-ffaa:0:1102 2>1 17-ffaa:0:1107",
        );
        assert!(!seq.accept(&path.path_interfaces()));
    }

    #[test]
    fn sequence_accepts_matching_runs() {
        let seq = SimpleSequence::new("19* 17*");
        let path = parse_segment(
            "19-ffaa:0:1303 1>1 19-ffaa:0:1302 2>1 17-ffaa:0:1108 2>1 17-ffaa:0:1102 2>1 17-ffaa:0:1107",
        );
        assert!(seq.accept(&path.path_interfaces()));
    }
}
