mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod fetched;
pub use fetched::Fetched;

mod app_layout;
pub use app_layout::{AppLayoutView, AuthCard};

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod password_reset;
pub use password_reset::{ForgotPasswordView, ResetPasswordView, VerifyOtpView};

mod dashboard;
pub use dashboard::DashboardView;

mod prediction;
pub use prediction::PredictionView;

mod recommendation;
pub use recommendation::RecommendationView;

mod summary;
pub use summary::SummaryView;

mod history;
pub use history::HistoryView;

mod profile;
pub use profile::ProfileView;
