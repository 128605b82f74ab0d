//! Host-environment collaborators used by the views: toast notifications,
//! record-page navigation and the viewer's position.

mod geolocation;
mod navigation;
mod notify;

pub use geolocation::{FixedPosition, PositionError, PositionOptions, PositionSource};
pub use navigation::{NavigationLog, Navigator, ObjectType, RecordPageRef};
pub use notify::{Notifier, Toast, ToastLog, ToastVariant};
