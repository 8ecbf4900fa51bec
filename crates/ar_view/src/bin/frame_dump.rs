//! Renders one synthetic frame and dumps the primitive list as JSON.
//!
//! Handy for eyeballing renderer changes without the GUI attached.

use ar_view::fixtures::StaticFilterData;
use ar_view::render::{Canvas, FieldView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = StaticFilterData::demo();
    let mut view = FieldView::new();
    let mut canvas = Canvas::new();

    view.render(&filter, &mut canvas);

    println!("{}", serde_json::to_string_pretty(canvas.primitives())?);
    eprintln!("✅ rendered {} primitives", canvas.primitives().len());

    Ok(())
}
