//! The screens a user can be on, independent of how a shell navigates.

/// Screens reachable from the drawer once signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Dashboard,
    Prediction,
    Recommendation,
    Summary,
    History,
    Profile,
}

impl Screen {
    /// Drawer order.
    pub const DRAWER: [Screen; 6] = [
        Self::Dashboard,
        Self::Prediction,
        Self::Recommendation,
        Self::Summary,
        Self::History,
        Self::Profile,
    ];

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Prediction => "Diabetes Prediction",
            Self::Recommendation => "Food Recommendations",
            Self::Summary => "Prediction Summary",
            Self::History => "Prediction History",
            Self::Profile => "My Profile",
        }
    }

    /// Drawer entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Prediction => "Prediction",
            Self::Recommendation => "Recommendations",
            Self::Summary => "Summary",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "Your statistics and health parameter trends",
            Self::Prediction => "Check your diabetes risk from health parameters",
            Self::Recommendation => "Foods suited to your latest result",
            Self::Summary => "Totals and averages over all your predictions",
            Self::History => "Every prediction you have made",
            Self::Profile => "Your account and body measurements",
        }
    }

    /// Path used by the URL-routed shells.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Prediction => "/prediction",
            Self::Recommendation => "/recommendation",
            Self::Summary => "/summary",
            Self::History => "/history",
            Self::Profile => "/profile",
        }
    }
}

/// Screens shown while anonymous. The OTP and reset steps carry the email
/// the reset was started for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
    ForgotPassword,
    VerifyOtp {
        email: String,
    },
    ResetPassword {
        email: String,
    },
}

impl AuthScreen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Forgot password",
            Self::VerifyOtp { .. } => "Verify OTP",
            Self::ResetPassword { .. } => "Reset password",
        }
    }

    /// Where the back action leads.
    pub fn back(&self) -> Option<AuthScreen> {
        match self {
            Self::Login => None,
            Self::Register | Self::ForgotPassword => Some(Self::Login),
            Self::VerifyOtp { .. } => Some(Self::ForgotPassword),
            Self::ResetPassword { email } => Some(Self::VerifyOtp {
                email: email.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_order_and_paths() {
        assert_eq!(Screen::DRAWER[0], Screen::default());
        let mut paths: Vec<_> = Screen::DRAWER.iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Screen::DRAWER.len());
        assert_eq!(Screen::History.label(), "History");
    }

    #[test]
    fn test_reset_flow_back_navigation() {
        let reset = AuthScreen::ResetPassword {
            email: "ani@gmail.com".into(),
        };
        let otp = reset.back().unwrap();
        assert_eq!(
            otp,
            AuthScreen::VerifyOtp {
                email: "ani@gmail.com".into()
            }
        );
        assert_eq!(otp.back(), Some(AuthScreen::ForgotPassword));
        assert_eq!(
            AuthScreen::ForgotPassword.back(),
            Some(AuthScreen::Login)
        );
        assert_eq!(AuthScreen::Login.back(), None);
    }
}
