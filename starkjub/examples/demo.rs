use num_bigint::BigInt;
use starkjub::parse::parse_decimal;
use starkjub::{Curve, CurveParams, Point, STARKJUB_SAMPLE_X, STARKJUB_SAMPLE_Y};
use structopt::StructOpt;

use std::fs::File;
use std::path::PathBuf;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "json file with custom curve parameters")]
    params: Option<PathBuf>,
    #[structopt(long, help = "x coordinate of the base point")]
    x: Option<String>,
    #[structopt(long, help = "y coordinate of the base point")]
    y: Option<String>,
}

fn check(label: &str, lhs: &Point, rhs: &Point) -> Result<(), String> {
    if lhs == rhs {
        log::info!("{}: ok", label);
        Ok(())
    } else {
        Err(format!("{} failed: {} != {}", label, lhs, rhs))
    }
}

fn main() -> Result<(), String> {
    let _ = env_logger::try_init();
    let opt = Opt::from_args();

    let curve = match opt.params {
        Some(path) => {
            let file = File::open(path).map_err(|e| e.to_string())?;
            let params: CurveParams = serde_json::from_reader(file).map_err(|e| e.to_string())?;
            Curve::from_params(params).map_err(|e| e.to_string())?
        }
        None => Curve::new(),
    };
    log::info!("modulus: {}", curve.modulus());
    log::debug!("encoding width: {} bits", curve.bit_width());

    let x = opt.x.as_deref().unwrap_or(STARKJUB_SAMPLE_X);
    let y = opt.y.as_deref().unwrap_or(STARKJUB_SAMPLE_Y);
    let x = parse_decimal(x).map_err(|e| e.to_string())?;
    let y = parse_decimal(y).map_err(|e| e.to_string())?;
    let p = curve.point(x, y).map_err(|e| e.to_string())?;
    log::info!("P = {}", p);

    let sum = p.add(&p).map_err(|e| e.to_string())?;
    log::info!("P + P = {}", sum);
    let double = p.double().map_err(|e| e.to_string())?;
    log::info!("double(P) = {}", double);
    check("P + P == double(P)", &sum, &double)?;

    let mul = |k: i64| p.scalar_mul(&BigInt::from(k)).map_err(|e| e.to_string());
    let eleven = mul(11)?;
    log::info!("11P = {}", eleven);
    let four_plus_seven = mul(4)?.add(&mul(7)?).map_err(|e| e.to_string())?;
    log::info!("4P + 7P = {}", four_plus_seven);
    check("11P == 4P + 7P", &eleven, &four_plus_seven)?;

    let compressed = p.compress();
    log::info!("compress(P) = 0x{}", compressed.to_hex(&curve));
    let restored = curve.decompress(&compressed).map_err(|e| e.to_string())?;
    check("decompress(compress(P)) == P", &restored, &p)?;

    let order_plus_one = BigInt::from(curve.order().clone()) + 1;
    let max = p.scalar_mul(&order_plus_one).map_err(|e| e.to_string())?;
    log::info!("(order + 1)P = {}", max);
    if !max.is_valid() {
        return Err("(order + 1)P is not on the curve".to_string());
    }

    Ok(())
}
