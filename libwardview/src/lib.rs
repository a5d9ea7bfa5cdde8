//! wardview - view routing and event notification for the ward dashboard
//!
//! This library provides the controller core of the hospital-operations
//! dashboard: a topic-keyed event bus, the view-routing state machine that
//! listens on it, the header notification badge, and the cancellable timers
//! that drive simulated live data. Rendering lives in `ward-tui`.
//!
//! # Example
//!
//! ```
//! use libwardview::{EventBus, Topic, View, ViewRouter};
//!
//! let bus = EventBus::new();
//! let router = ViewRouter::mount(&bus);
//!
//! // A stat card asks for the critical patients list
//! bus.publish(Topic::ShowCriticalPatients);
//! assert_eq!(router.active(), View::CriticalPatients);
//!
//! // The list panel calls the router directly
//! let state = router.select_patient("P-42")?;
//! assert_eq!(state.active, View::PatientAlert);
//! assert_eq!(state.selected_patient_id.as_deref(), Some("P-42"));
//! # Ok::<(), libwardview::WardError>(())
//! ```

pub mod bus;
pub mod config;
pub mod error;
pub mod live;
pub mod logging;
pub mod notifications;
pub mod router;
pub mod topic;
pub mod view;

// Re-export commonly used types
pub use bus::{Event, EventBus, PublishReport, Subscription};
pub use config::Config;
pub use error::{ConfigError, Result, RouterError, WardError};
pub use notifications::NotificationBadge;
pub use router::{transition, Trigger, ViewRouter};
pub use topic::Topic;
pub use view::{View, ViewState};
