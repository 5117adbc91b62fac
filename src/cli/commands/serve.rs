use clap::Args;

use crate::config::AppConfig;

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Address to bind (overrides FROTA_API_HOST)")]
    pub host: Option<String>,

    #[arg(long, short, help = "Port to listen on (overrides FROTA_API_PORT)")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Flags win over environment and preset values
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.api.host = host;
        }
        if let Some(port) = self.port {
            config.api.port = port;
        }
        config
    }
}

pub async fn handle(args: ServeArgs, config: AppConfig) -> anyhow::Result<()> {
    crate::server::run(args.apply(config)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs { host: None, port: Some(1234) };
        let config = args.apply(AppConfig::development());
        assert_eq!(config.bind_addr(), "0.0.0.0:1234");
    }
}
