//! Runtime configuration for the `fretes-tonic-server` binary.
//!
//! Values are parsed from CLI arguments or environment variables, with
//! defaults suitable for local runs, then validated into a [`ServerConfig`].

use anyhow::bail;
use clap::Parser;
use std::net::SocketAddr;

/// CLI/env settings for the fretes server.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fretes-tonic-server",
    version,
    about = "A gRPC service that quotes shipping cost for a CEP"
)]
pub struct CliArgs {
    /// Address to listen on (TCP or Unix socket path; use --uds for Unix socket).
    ///
    /// Example: "0.0.0.0:50051" or "/tmp/fretes-uds.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50051"))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.server_addr.is_empty() {
            bail!("SERVER_ADDR must not be empty");
        }

        // Unix socket paths are taken verbatim; TCP addresses must parse.
        if !args.uds && args.server_addr.parse::<SocketAddr>().is_err() {
            bail!(
                "SERVER_ADDR ({}) is not a valid TCP listen address",
                args.server_addr
            );
        }

        Ok(Self {
            server_addr: args.server_addr,
            uds: args.uds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(server_addr: &str, uds: bool) -> CliArgs {
        CliArgs {
            server_addr: server_addr.to_string(),
            uds,
        }
    }

    #[test]
    fn accepts_a_tcp_listen_address() {
        let config = ServerConfig::try_from(args("127.0.0.1:50051", false)).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:50051");
        assert!(!config.uds);
    }

    #[test]
    fn rejects_a_non_address_when_tcp() {
        assert!(ServerConfig::try_from(args("/tmp/fretes.sock", false)).is_err());
        assert!(ServerConfig::try_from(args("localhost", false)).is_err());
    }

    #[test]
    fn takes_socket_paths_verbatim_when_uds() {
        let config = ServerConfig::try_from(args("/tmp/fretes.sock", true)).unwrap();
        assert_eq!(config.server_addr, "/tmp/fretes.sock");
        assert!(config.uds);
    }

    #[test]
    fn rejects_an_empty_address() {
        assert!(ServerConfig::try_from(args("", false)).is_err());
        assert!(ServerConfig::try_from(args("", true)).is_err());
    }
}
