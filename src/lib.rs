mod config;
pub use config::Config;

mod defaults;
pub use defaults::{Defaults, SharedDefaults};

mod error;
pub use error::Error;

mod family;
pub use family::{SizeCategory, WidgetDescriptor, WidgetFamily, COUNTDOWN_WIDGET};

mod reader;
pub use reader::{keys, snapshot_from_defaults, DefaultsSource, SnapshotReader};

mod render;
pub use render::{render, Renderer, DEFAULT_DATE_FORMAT};

mod result;
pub use result::Result;

mod snapshot;
pub use snapshot::CountdownSnapshot;

mod timeline;
pub use timeline::{Provider, ReloadPolicy, Timeline};

pub mod view;
pub use view::View;
