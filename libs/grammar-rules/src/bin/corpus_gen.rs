//! Generates the hospital corpus against the standard asset vocabulary and
//! writes the final compound shape to `corpus.obj`.
//!
//! The pipeline has no configuration surface beyond the constants embedded
//! in the rule catalogue, so the binary takes no flags. Set `RUST_LOG` to
//! see per-stage traces.

use grammar_mesh::export::write_obj;
use grammar_rules::pipeline::generate_hospital;
use grammar_rules::RuleError;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), RuleError> {
    let (scene, shape) = generate_hospital()?;

    let final_shape = scene.lookup(shape)?;
    let world = final_shape.world_mesh();
    write_obj(&world, "corpus.obj")?;

    let (min, max) = world.bounding_box();
    info!(
        name = final_shape.name(),
        vertices = world.vertex_count(),
        triangles = world.triangle_count(),
        height = max.z - min.z,
        "wrote corpus.obj"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("generation failed: {err}");
        std::process::exit(1);
    }
}
