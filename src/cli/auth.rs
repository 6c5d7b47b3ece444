use crate::{info, smartthings, utils, warning};

/// Starts the manual SmartThings authorization flow.
///
/// Opens the consent page in the default browser. After the user grants
/// access, SmartThings redirects to the proxy's `/oauth/callback`, which
/// performs the code exchange and prints the access token. The token is not
/// stored anywhere; the user copies it into the `.env` file themselves.
pub async fn auth() {
    let auth_url = smartthings::auth::build_authorize_url(&utils::generate_state());

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    info!("After granting access, the callback page shows your access token.");
    info!("Store it as SMARTTHINGS_ACCESS_TOKEN in the washcli .env file.");
}
