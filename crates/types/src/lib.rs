pub mod declaration;
pub mod diagnostic;
pub mod ids;
pub mod location;
pub mod metrics;

pub use declaration::FontFaceDeclaration;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use ids::{FamilyName, FontClass};
pub use location::Location;
pub use metrics::FallbackMetrics;
