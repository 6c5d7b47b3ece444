use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token obtained from the one-shot authorization-code exchange.
///
/// Nothing beyond the access token is kept: the flow stores and refreshes
/// nothing, the callback only surfaces the token to the caller.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
}

/// Shared router state, built once at server startup.
#[derive(Debug, Clone)]
pub struct ProxyState {
    /// Pre-shared bearer token inbound requests must present.
    pub api_token: String,
    /// Ordered device-id table; machine numbers are 1-based indices into it.
    pub device_ids: Vec<String>,
    /// SmartThings access token attached to upstream status requests.
    pub upstream_token: String,
}

/// A completion estimate as reported upstream: the estimated finish time and
/// the moment that estimate was sampled, both RFC3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionTime {
    pub value: String,
    pub timestamp: String,
}

/// The proxy's output contract for `POST /device/{nr}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub stopped: bool,
    #[serde(rename = "completionTime", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<CompletionTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatusResponse {
    pub components: Components,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    pub main: MainComponent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainComponent {
    #[serde(rename = "washerOperatingState")]
    pub washer_operating_state: Option<WasherOperatingState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasherOperatingState {
    #[serde(rename = "machineState")]
    pub machine_state: MachineState,
    #[serde(rename = "completionTime")]
    pub completion_time: Option<CompletionTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineState {
    pub value: String,
}

#[derive(Tabled)]
pub struct MachineTableRow {
    pub machine: usize,
    pub state: String,
    pub remaining: String,
    pub staleness: String,
}
