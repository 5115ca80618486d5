use crate::models::TagSet;
use crate::query::{parse_id_list, HotelFilter};
use clap::Parser;

pub const DEFAULT_ACME_URL: &str = "https://5f2be0b3e3b5e10016d0f7d4.mockapi.io/suppliers/acme";
pub const DEFAULT_PATAGONIA_URL: &str =
    "https://5f2be0b3e3b5e10016d0f7d4.mockapi.io/suppliers/patagonia";
pub const DEFAULT_PAPERFLIES_URL: &str =
    "https://5f2be0b3e3b5e10016d0f7d4.mockapi.io/suppliers/paperflies";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("hotel-scout/", env!("CARGO_PKG_VERSION"));

/// What to do when one supplier cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole run
    #[default]
    Abort,
    /// Log the failure and build the catalog from the remaining suppliers
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierEndpoints {
    pub acme: String,
    pub patagonia: String,
    pub paperflies: String,
}

impl Default for SupplierEndpoints {
    fn default() -> Self {
        Self {
            acme: DEFAULT_ACME_URL.to_string(),
            patagonia: DEFAULT_PATAGONIA_URL.to_string(),
            paperflies: DEFAULT_PAPERFLIES_URL.to_string(),
        }
    }
}

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "hotel-scout")]
#[command(about = "Merge hotel data from several suppliers and filter it by id")]
pub struct Cli {
    /// Comma-separated hotel ids, or `none` for all hotels
    pub hotel_ids: String,

    /// Comma-separated destination ids, or `none` for all destinations
    pub destination_ids: String,

    #[arg(long, env = "HOTEL_SCOUT_ACME_URL", default_value = DEFAULT_ACME_URL)]
    pub acme_url: String,

    #[arg(long, env = "HOTEL_SCOUT_PATAGONIA_URL", default_value = DEFAULT_PATAGONIA_URL)]
    pub patagonia_url: String,

    #[arg(long, env = "HOTEL_SCOUT_PAPERFLIES_URL", default_value = DEFAULT_PAPERFLIES_URL)]
    pub paperflies_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "HOTEL_SCOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = "HOTEL_SCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Build the catalog from the suppliers that answered instead of failing
    #[arg(long, env = "HOTEL_SCOUT_SKIP_FAILED")]
    pub skip_failed_suppliers: bool,
}

/// Resolved run configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub filter: HotelFilter,
    pub endpoints: SupplierEndpoints,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub failure_policy: FailurePolicy,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let hotel_ids: TagSet = parse_id_list(&cli.hotel_ids);
        let destination_ids: TagSet = parse_id_list(&cli.destination_ids);

        Self {
            filter: HotelFilter {
                hotel_ids,
                destination_ids,
            },
            endpoints: SupplierEndpoints {
                acme: cli.acme_url,
                patagonia: cli.patagonia_url,
                paperflies: cli.paperflies_url,
            },
            timeout_secs: cli.timeout_secs,
            user_agent: cli.user_agent,
            failure_policy: if cli.skip_failed_suppliers {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hotel-scout").chain(args.iter().copied()))
    }

    #[test]
    fn two_positionals_build_a_filter() {
        let config = AppConfig::from(parse(&["iJhz,SjyX", "none"]).unwrap());
        assert_eq!(
            config.filter,
            HotelFilter::new(["iJhz", "SjyX"], Vec::<String>::new())
        );
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn fewer_than_two_positionals_is_a_usage_error() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["none"]).is_err());
    }

    #[test]
    fn flags_override_endpoints_and_policy() {
        let config = AppConfig::from(
            parse(&[
                "none",
                "5432",
                "--acme-url",
                "http://localhost:1/acme",
                "--skip-failed-suppliers",
            ])
            .unwrap(),
        );
        assert_eq!(config.endpoints.acme, "http://localhost:1/acme");
        assert_eq!(config.endpoints.patagonia, DEFAULT_PATAGONIA_URL);
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
        assert_eq!(
            config.filter.destination_ids.iter().collect::<Vec<_>>(),
            vec!["5432"]
        );
    }
}
