//! Confirmation gate in front of logout.

use std::fmt;

use crate::error::NavError;
use crate::traits::SessionHandle;

pub const LOGOUT_TITLE: &str = "Logout";
pub const LOGOUT_MESSAGE: &str = "Are you sure you want to logout?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutStage {
    #[default]
    Idle,
    Confirming,
    Cancelled,
    Confirmed,
}

impl fmt::Display for LogoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogoutStage::Idle => "idle",
            LogoutStage::Confirming => "confirming",
            LogoutStage::Cancelled => "cancelled",
            LogoutStage::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}

/// `Idle -> Confirming -> (Cancelled | Confirmed)`.
///
/// A finished flow can be requested again, which reopens the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoutFlow {
    stage: LogoutStage,
}

impl LogoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> LogoutStage {
        self.stage
    }

    pub fn is_prompt_open(&self) -> bool {
        self.stage == LogoutStage::Confirming
    }

    /// Open the confirmation prompt. Requesting while already open does nothing.
    pub fn request(&mut self) {
        if self.stage != LogoutStage::Confirming {
            log::debug!("Logout requested from {}", self.stage);
            self.stage = LogoutStage::Confirming;
        }
    }

    /// Dismiss the prompt without logging out.
    pub fn cancel(&mut self) -> Result<(), NavError> {
        self.expect_confirming("cancel")?;
        self.stage = LogoutStage::Cancelled;
        Ok(())
    }

    /// Accept the prompt and log out through `session`.
    pub fn confirm(&mut self, session: &dyn SessionHandle) -> Result<(), NavError> {
        self.expect_confirming("confirm")?;
        self.stage = LogoutStage::Confirmed;
        log::info!("Logout confirmed");
        session.logout();
        Ok(())
    }

    fn expect_confirming(&self, action: &'static str) -> Result<(), NavError> {
        if self.stage == LogoutStage::Confirming {
            Ok(())
        } else {
            Err(NavError::InvalidLogoutTransition {
                from: self.stage,
                action,
            })
        }
    }
}
