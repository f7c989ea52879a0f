use serde::Deserialize;

use crate::domain::route::Route;

#[derive(Deserialize)]
/// Carries the page a state-changing POST was submitted from.
pub struct ReturnToForm {
    #[serde(default)]
    pub return_to: String,
}

impl ReturnToForm {
    /// Route to go back to. Only local paths are honoured.
    pub fn route(&self) -> Option<Route> {
        let path = self.return_to.trim();
        if path.starts_with('/') && !path.starts_with("//") {
            Some(Route::parse(path))
        } else {
            None
        }
    }
}
