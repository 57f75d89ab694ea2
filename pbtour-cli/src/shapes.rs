use anyhow::{anyhow, Result};
use pbtour_core::shapes::{downcast, Value};
use pbtour_core::Shape;

pub fn handle_shapes() -> Result<()> {
    let shapes = [
        Shape::Circle { radius: 5.0 },
        Shape::Rectangle {
            width: 3.0,
            height: 4.0,
        },
    ];

    for shape in &shapes {
        println!("{}", shape);
        println!("  area: {:.2}", shape.area());
    }

    let y: f64 = downcast(Value(10.0).into_any())
        .map_err(|_| anyhow!("value does not hold an f64"))?;
    println!("{}", y);
    Ok(())
}
