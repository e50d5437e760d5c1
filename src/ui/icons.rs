//! Emoji used across the dashboard output, with plain fallbacks for
//! terminals that cannot draw them.

use console::Emoji;

// Status
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!]");

// Sections
pub static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static SHIELD: Emoji<'_, '_> = Emoji("🛡️  ", "");
pub static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");
pub static FIRE: Emoji<'_, '_> = Emoji("🔥 ", "");
pub static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "fix:");
pub static USER: Emoji<'_, '_> = Emoji("👤 ", "");
