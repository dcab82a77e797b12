mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod password_reset;
pub use password_reset::{ForgotPassword, ResetPassword, VerifyOtp};

mod app_layout;
pub use app_layout::AppLayout;

mod screens;
pub use screens::{Dashboard, History, Prediction, Profile, Recommendation, Summary};
