use std::rc::Rc;

use log::{debug, error};
use scorm_api::scorm2004::{elements, API_PROPERTY};
use scorm_api::Scorm2004Host;

use crate::context::ApiContext;
use crate::locator::locate;
use crate::session::{RuntimeSession, SessionState};

/// Elements seeded right after a successful initialize. Unlike 1.2, the
/// 2004 data model splits completion and success into separate fields.
const BASELINE: [(&str, &str); 4] = [
    (elements::COMPLETION_STATUS, "incomplete"),
    (elements::SUCCESS_STATUS, "unknown"),
    (elements::SCORE_MIN, "0"),
    (elements::SCORE_MAX, "100"),
];

/// Session adapter for a SCORM 2004 host.
///
/// Same contract as [`Scorm12Session`](crate::Scorm12Session); the
/// dialect's own call names are issued underneath.
pub struct Scorm2004Session {
    api: Option<Rc<dyn Scorm2004Host>>,
    state: SessionState,
}

impl Scorm2004Session {
    /// Locate the host API object starting from `context` and wrap it.
    pub fn discover(context: Rc<dyn ApiContext<dyn Scorm2004Host>>) -> Self {
        let api = match locate(context, API_PROPERTY) {
            Ok(api) => Some(api),
            Err(err) => {
                error!("{}", err);
                None
            }
        };
        Self {
            api,
            state: SessionState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Seed the data model after a successful initialize. Outcomes are
    /// intentionally discarded; these writes never gate the initialize
    /// result.
    fn write_baseline(&self) {
        for (element, value) in BASELINE {
            let _ = self.set_value(element, value);
        }
    }
}

impl RuntimeSession for Scorm2004Session {
    fn initialize(&mut self) -> bool {
        let Some(api) = &self.api else {
            error!("Initialize skipped: SCORM 2004 API not found");
            return false;
        };

        let result = api.initialize("");
        debug!("Initialize returned {}", result);
        if !result.is_success() {
            return false;
        }

        self.state = SessionState::Active;
        self.write_baseline();
        true
    }

    fn terminate(&mut self) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.terminate("");
        debug!("Terminate returned {}", result);
        if !result.is_success() {
            return false;
        }

        self.state = SessionState::Terminated;
        true
    }

    fn get_value(&self, element: &str) -> String {
        let Some(api) = &self.api else {
            return String::new();
        };

        let value = api.get_value(element);
        // Last-error reflects only the most recent call; read it before
        // anything else touches the host.
        let code = api.get_last_error();
        if !code.is_clear() {
            error!("GetValue('{}') failed: error {}", element, code);
            return String::new();
        }

        value
    }

    fn set_value(&self, element: &str, value: &str) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.set_value(element, value);
        let code = api.get_last_error();
        if !code.is_clear() {
            error!(
                "SetValue('{}', '{}') failed: error {}",
                element, value, code
            );
            return false;
        }

        result.is_success()
    }

    fn commit(&self) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.commit("");
        let code = api.get_last_error();
        if !code.is_clear() {
            error!("Commit failed: error {}", code);
            return false;
        }

        result.is_success()
    }
}
