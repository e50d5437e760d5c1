//! Record detail for `quality-iq show <kind> <id>`.

use anyhow::Result;

use quality_iq::details::{RecordKind, find};

use super::{Context, emit};

pub fn cmd_show(ctx: &Context, kind: RecordKind, id: &str) -> Result<()> {
    let record = find(&ctx.data, kind, id)?;
    tracing::debug!(kind = %kind, id, "showing record");
    emit(ctx.format, &record, || {
        record
            .panel(&ctx.data, ctx.config.date_format())
            .render(ctx.render.max_width)
    })
}
