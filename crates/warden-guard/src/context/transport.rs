//! Transport kinds.

use crate::error::GuardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Transport an invocation arrived on.
///
/// `Graphql` and `Ws` only exist when their cargo feature is enabled, so
/// every dispatch over this enum stays exhaustive for the compiled build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Plain HTTP routes.
    Http,
    /// GraphQL resolvers.
    #[cfg(feature = "graphql")]
    Graphql,
    /// WebSocket message handlers.
    #[cfg(feature = "websocket")]
    Ws,
    /// RPC and other message transports.
    Rpc,
}

impl TransportKind {
    /// Configuration name of this transport.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            #[cfg(feature = "graphql")]
            Self::Graphql => "graphql",
            #[cfg(feature = "websocket")]
            Self::Ws => "ws",
            Self::Rpc => "rpc",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            #[cfg(feature = "graphql")]
            "graphql" => Ok(Self::Graphql),
            #[cfg(not(feature = "graphql"))]
            "graphql" => Err(GuardError::MissingPeer {
                transport: "graphql",
                feature: "graphql",
            }),
            #[cfg(feature = "websocket")]
            "ws" => Ok(Self::Ws),
            #[cfg(not(feature = "websocket"))]
            "ws" => Err(GuardError::MissingPeer {
                transport: "ws",
                feature: "websocket",
            }),
            "rpc" => Ok(Self::Rpc),
            other => Err(GuardError::UnknownTransport(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_transports() {
        assert_eq!("http".parse::<TransportKind>().unwrap(), TransportKind::Http);
        assert_eq!(" RPC ".parse::<TransportKind>().unwrap(), TransportKind::Rpc);
    }

    #[cfg(all(feature = "graphql", feature = "websocket"))]
    #[test]
    fn test_parse_optional_transports() {
        assert_eq!("graphql".parse::<TransportKind>().unwrap(), TransportKind::Graphql);
        assert_eq!("ws".parse::<TransportKind>().unwrap(), TransportKind::Ws);
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let result = "smtp".parse::<TransportKind>();
        assert!(matches!(result, Err(GuardError::UnknownTransport(name)) if name == "smtp"));
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(TransportKind::Http.to_string(), "http");
        assert_eq!(TransportKind::Rpc.to_string(), "rpc");
    }
}
