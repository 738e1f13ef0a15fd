mod error;
pub use error::ChartError;

pub(crate) mod axis;
pub use axis::{AxisValueFormatter, IndexLabelFormatter, SampleLabelFormatter, TimestampFormatter};

pub(crate) mod translation;
pub use translation::TimestampTranslation;

pub(crate) mod aggregate;
pub use aggregate::{ActivityAggregator, SleepTransition, StepsDay, StepsSummary};

pub(crate) mod goals;
pub use goals::GoalProgress;

pub(crate) mod labels;
pub use labels::{AngledLabels, LabelRenderer, SvgLabelRenderer};

pub mod helpers;
