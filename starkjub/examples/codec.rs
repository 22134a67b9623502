use starkjub::parse::parse_decimal;
use starkjub::{CompressedPoint, Curve};
use structopt::StructOpt;

#[derive(StructOpt)]
enum Opt {
    /// Compress a StarkJub point given by its decimal coordinates
    Compress {
        #[structopt(long)]
        x: String,
        #[structopt(long)]
        y: String,
    },
    /// Decompress a hex encoded StarkJub point
    Decompress {
        #[structopt(long)]
        hex: String,
    },
}

fn main() -> Result<(), String> {
    let _ = env_logger::try_init();
    let curve = Curve::new();

    match Opt::from_args() {
        Opt::Compress { x, y } => {
            let x = parse_decimal(&x).map_err(|e| e.to_string())?;
            let y = parse_decimal(&y).map_err(|e| e.to_string())?;
            let point = curve.point(x, y).map_err(|e| e.to_string())?;
            let compressed = point.compress();
            log::debug!("compressed integer: {}", compressed);
            println!("0x{}", compressed.to_hex(&curve));
        }
        Opt::Decompress { hex } => {
            let compressed = CompressedPoint::from_hex(&hex).map_err(|e| e.to_string())?;
            let point = curve.decompress(&compressed).map_err(|e| e.to_string())?;
            log::debug!("sign of x: {}", point.x().is_odd());
            println!("{}", point);
        }
    }

    Ok(())
}
