//! Canonical `urn:sdx:` identifiers.

/// Prefix shared by every SDX identifier.
pub const URN_PREFIX: &str = "urn:sdx:";

/// The kind of element an SDX URN names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UrnKind {
    /// The topology document itself.
    Topology,
    /// A switch.
    Node,
    /// A switch port.
    Port,
    /// A link.
    Link,
    /// An advertised service.
    Service,
}

impl UrnKind {
    /// The URN segment for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topology => "topology",
            Self::Node => "node",
            Self::Port => "port",
            Self::Link => "link",
            Self::Service => "service",
        }
    }

    fn parse(segment: &str) -> Option<Self> {
        match segment {
            "topology" => Some(Self::Topology),
            "node" => Some(Self::Node),
            "port" => Some(Self::Port),
            "link" => Some(Self::Link),
            "service" => Some(Self::Service),
            _ => None,
        }
    }
}

/// Build `urn:sdx:<kind>:<namespace>:<local_id>`.
#[must_use]
pub fn urn(kind: UrnKind, namespace: &str, local_id: &str) -> String {
    format!("{URN_PREFIX}{}:{namespace}:{local_id}", kind.as_str())
}

/// Topology URN for the exchange at `url` (`urn:sdx:topology:<url>`).
#[must_use]
pub fn topology_id(url: &str) -> String {
    format!("{URN_PREFIX}{}:{url}", UrnKind::Topology.as_str())
}

/// Split an SDX URN into its kind and namespace.
///
/// Returns `None` for anything that is not a well formed `urn:sdx:` identifier.
#[must_use]
pub fn parse(urn: &str) -> Option<(UrnKind, &str)> {
    let rest = urn.strip_prefix(URN_PREFIX)?;
    let mut segments = rest.splitn(3, ':');
    let kind = UrnKind::parse(segments.next()?)?;
    let namespace = segments.next().filter(|s| !s.is_empty())?;
    segments.next().filter(|s| !s.is_empty())?;

    Some((kind, namespace))
}

/// Make a controller name safe to embed as a single URN segment.
pub(crate) fn local_segment(name: &str) -> String {
    name.trim().replace(':', "_").replace(char::is_whitespace, "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urn_layout() {
        assert_eq!(
            urn(UrnKind::Port, "ampath.net", "Ampath1:50"),
            "urn:sdx:port:ampath.net:Ampath1:50"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            parse("urn:sdx:port:sax.net:Sax01:40"),
            Some((UrnKind::Port, "sax.net"))
        );
        assert_eq!(parse("urn:sdx:port:sax.net"), None);
        assert_eq!(parse("urn:sdx:cable:sax.net:x"), None);
        assert_eq!(parse("cc:00:00:00:00:00:00:01:40"), None);
    }

    #[test]
    fn test_local_segment() {
        assert_eq!(local_segment("00:00:00:01"), "00_00_00_01");
        assert_eq!(local_segment(" Sax 01 "), "Sax_01");
    }
}
