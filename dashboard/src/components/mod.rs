//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod dashboard;
mod finance;
mod loan_application;
mod loan_approval;
mod products;
mod savings_account;
mod side_bar;
mod tab_manager;
mod tab_nav;
mod user_data;
mod user_personal_info;
mod users;

pub use dashboard::DashboardView;
pub use finance::FinanceView;
pub use loan_application::LoanApplicationView;
pub use loan_approval::LoanApprovalView;
pub use products::ProductsView;
pub use savings_account::SavingsAccountsView;
pub use tab_manager::{TabManager, TabsContext};
pub use user_data::UserDataView;
pub use user_personal_info::UserPersonalInfoView;
pub use users::UsersView;
