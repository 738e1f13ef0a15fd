mod activity_kind;
pub use activity_kind::ActivityKind;

mod activity_sample;
pub use activity_sample::ActivitySample;

mod goals;
pub use goals::ActivityGoals;
