use crate::error::Error;
use crate::models::ia::{fingerprint_of, Ia, Interface, PathInterfaces};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A path segment: either an atomic `Literal` hop sequence, or a `Composition` of
/// other segments joined end to end. Immutable once constructed; identity is by
/// [`Segment::fingerprint`], not by address.
#[derive(Clone, Debug)]
pub enum Segment {
    Literal {
        interfaces: PathInterfaces,
        fingerprint: String,
    },
    Composition {
        children: Vec<Rc<Segment>>,
        fingerprint: String,
    },
}

impl Segment {
    /// Builds a Literal from an interface sequence, copying it and computing its
    /// fingerprint. Fails if `interfaces` is empty.
    pub fn literal(interfaces: PathInterfaces) -> Result<Segment, Error> {
        if interfaces.is_empty() {
            return Err(Error::InvariantViolation(
                "literal segment must have at least one interface".into(),
            ));
        }
        let fingerprint = fingerprint_of(&interfaces);
        Ok(Segment::Literal {
            interfaces,
            fingerprint,
        })
    }

    /// Builds a Composition from an ordered child list, validating joinability
    /// (`children[k].dstIA == children[k+1].srcIA`) and non-emptiness.
    pub fn composition(children: Vec<Rc<Segment>>) -> Result<Segment, Error> {
        if children.is_empty() {
            return Err(Error::InvariantViolation(
                "composition must have at least one child".into(),
            ));
        }
        for pair in children.windows(2) {
            if pair[0].dst_ia() != pair[1].src_ia() {
                return Err(Error::InvariantViolation(format!(
                    "composition children are not joinable: {} != {}",
                    pair[0].dst_ia(),
                    pair[1].src_ia()
                )));
            }
        }
        Ok(Self::composition_unchecked(children))
    }

    /// Builds a Composition without validating joinability. Used by the decoder,
    /// which trusts a cooperative peer's wire data rather than re-checking it.
    pub(crate) fn composition_unchecked(children: Vec<Rc<Segment>>) -> Segment {
        let fingerprint = children.iter().map(|c| c.fingerprint()).collect();
        Segment::Composition {
            children,
            fingerprint,
        }
    }

    pub fn fingerprint(&self) -> &str {
        match self {
            Segment::Literal { fingerprint, .. } => fingerprint,
            Segment::Composition { fingerprint, .. } => fingerprint,
        }
    }

    pub fn src_ia(&self) -> Ia {
        match self {
            Segment::Literal { interfaces, .. } => interfaces[0].ia,
            Segment::Composition { children, .. } => children[0].src_ia(),
        }
    }

    pub fn dst_ia(&self) -> Ia {
        match self {
            Segment::Literal { interfaces, .. } => interfaces[interfaces.len() - 1].ia,
            Segment::Composition { children, .. } => children[children.len() - 1].dst_ia(),
        }
    }

    /// The segment's expanded hop sequence. For a Composition this walks the DAG
    /// and concatenates each child's expansion; the result is never cached.
    pub fn path_interfaces(&self) -> PathInterfaces {
        match self {
            Segment::Literal { interfaces, .. } => interfaces.clone(),
            Segment::Composition { children, .. } => {
                let mut out = Vec::new();
                for child in children {
                    out.extend(child.path_interfaces());
                }
                out
            }
        }
    }

    pub fn is_composition(&self) -> bool {
        matches!(self, Segment::Composition { .. })
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal { interfaces, .. } => {
                let rendered: Vec<String> = interfaces.iter().map(Interface::to_string).collect();
                write!(f, "{}", rendered.join(" "))
            }
            Segment::Composition { children, .. } => {
                let rendered: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", rendered.join(" + "))
            }
        }
    }
}
