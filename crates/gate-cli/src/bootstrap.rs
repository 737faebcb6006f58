use anyhow::Context;

/// Load the layered, validated config. `.env` loading happens inside
/// `GatehouseConfig::load_validated`, once.
pub fn load_config() -> anyhow::Result<gate_config::GatehouseConfig> {
    gate_config::GatehouseConfig::load_validated().context("invalid gatehouse configuration")
}
