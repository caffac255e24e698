mod activity_list;
mod backup_list;
mod busy_button;
mod create_backup_modal;
mod stat_card;
mod toast;

pub use activity_list::ActivityList;
pub use backup_list::BackupList;
pub use busy_button::BusyButton;
pub use create_backup_modal::CreateBackupModal;
pub use stat_card::StatCard;
pub use toast::{ToastContainer, ToastProvider, use_toasts};
