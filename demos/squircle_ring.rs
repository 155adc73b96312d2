extern crate contour;
use contour::{Rgba, Shadow, ShadowFilter, SquircleParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (240.0, 160.0);
    let params = SquircleParams {
        smoothing: 0.8,
        stroke_width: 6.0,
        ..SquircleParams::default()
    }
    .with_border_radius("32px 12px");
    params.validate(width, height)?;

    let ring = params.ring(width, height);
    let shadows = [
        Shadow {
            dy: 4.0,
            blur: 8.0,
            color: Rgba::parse("rgba(0, 0, 0, 0.3)")?,
            ..Shadow::default()
        },
        Shadow {
            dx: 2.0,
            dy: 2.0,
            blur: 3.0,
            color: Rgba::parse("#ffffff80")?,
            inset: true,
        },
    ];
    let (drop, inset) = ShadowFilter::split("card", &shadows);

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" overflow="visible">"#
    );
    println!("<defs>");
    for filter in drop.iter().chain(inset.iter()) {
        println!("{filter}");
    }
    println!("</defs>");
    if let Some(drop) = &drop {
        println!(r#"<path d="{}" filter="{}"/>"#, ring.outer, drop.url());
    }
    println!(r#"<path d="{}" fill="{}"/>"#, ring.outer, Rgba::parse("papayawhip")?.rgb_string());
    if let Some(inset) = &inset {
        println!(r#"<path d="{}" filter="{}"/>"#, ring.outer, inset.url());
    }
    println!(r#"<path d="{}" fill="rgb(235, 76, 45)" fill-rule="evenodd"/>"#, ring.even_odd_d());
    println!("</svg>");
    Ok(())
}
