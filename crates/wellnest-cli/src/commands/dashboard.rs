use wellnest_core::{Config, DashboardStats};

use super::{Context, StoreHandle};

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let handle = StoreHandle::open(ctx)?;
    let config = Config::load_or_default();
    let stats = DashboardStats::compute(
        &handle.store,
        ctx.today,
        ctx.hour,
        &config.profile.display_name,
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
