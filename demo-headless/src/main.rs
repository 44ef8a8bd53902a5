use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use veclib_core::{difference, dot, length, print, scale, sum, unit, Vec3};

/// Vector library demo: prints two vectors and every operation on them
#[derive(Parser, Debug)]
#[command(name = "veclib-demo")]
#[command(about = "3D vector arithmetic demo", long_about = None)]
struct Args {
    /// First vector as X,Y,Z
    #[arg(
        short,
        long,
        default_value = "1,2,3",
        value_parser = parse_vec3,
        allow_hyphen_values = true
    )]
    a: Vec3,

    /// Second vector as X,Y,Z
    #[arg(
        short,
        long,
        default_value = "0,-5,9",
        value_parser = parse_vec3,
        allow_hyphen_values = true
    )]
    b: Vec3,

    /// Scale factor applied to the first vector
    #[arg(short, long, default_value_t = 10.0, allow_hyphen_values = true)]
    factor: f64,
}

/// Parse `"x,y,z"` into a vector.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!(
            "expected three comma-separated components, got {}",
            parts.len()
        ));
    };

    let component =
        |c: &str| c.parse::<f64>().map_err(|e| format!("invalid component '{c}': {e}"));
    Ok(Vec3::new(component(*x)?, component(*y)?, component(*z)?))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!(a = %args.a, b = %args.b, factor = args.factor, "starting demo");

    println!("=== Vector Library Demo ===\n");
    print("a", args.a);
    print("b", args.b);
    println!();

    println!("a . b = {:.6}", dot(args.a, args.b));
    println!("|a| = {:.6}", length(args.a));
    println!("|b| = {:.6}", length(args.b));

    let mut out = Vec3::ZERO;
    scale(args.factor, args.a, &mut out);
    print(&format!("{} * a", args.factor), out);

    difference(args.b, args.a, &mut out);
    print("a - b", out);

    sum(args.a, args.b, &mut out);
    print("a + b", out);

    // In place: the input storage receives the result
    let mut a_hat = args.a;
    unit(a_hat, &mut a_hat);
    if length(args.a) == 0.0 {
        println!("unit(a) is undefined for the zero vector, a left unchanged");
    }
    print("unit(a)", a_hat);
    println!("|unit(a)| = {:.6}", length(a_hat));
}
