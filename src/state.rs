use hostel_client::HostelClient;
use hostel_config::ApiConfig;

/// Everything a screen or command needs, passed down explicitly.
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: HostelClient,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn new(api_config: ApiConfig) -> anyhow::Result<Self> {
        let client = HostelClient::new(&api_config)?;
        Ok(Self { client, api_config })
    }
}
