use std::env;

/// Profile under which fixture data is seeded at startup
pub const TEST_PROFILE: &str = "test";

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    /// `profile_override` (the `--profile` CLI flag) wins over `PROFILE`.
    pub fn from_env(profile_override: Option<String>) -> Self {
        Self::from_lookup(profile_override, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(profile_override: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = profile_override
            .or_else(|| lookup("PROFILE"))
            .unwrap_or_else(|| "default".to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| match profile.as_str() {
            TEST_PROFILE => "sqlite::memory:".to_string(),
            "default" => "sqlite://workshop.db?mode=rwc".to_string(),
            other => format!("sqlite://workshop_{}.db?mode=rwc", other),
        });

        Self {
            database_url,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
        }
    }

    pub fn is_test_profile(&self) -> bool {
        self.profile == TEST_PROFILE
    }
}

/// Extract the value following `--profile` from CLI arguments
pub fn profile_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--profile" {
            return args.next();
        }
    }
    None
}
