use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Parser;

/// Write a synthetic bakery point-of-sale export.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "bakerysales.csv")]
    output: PathBuf,

    /// Number of trading days to generate
    #[arg(short, long, default_value_t = 30)]
    days: u64,

    /// PRNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// Article name and unit price in euros.
const ARTICLES: &[(&str, f64)] = &[
    ("TRADITIONAL BAGUETTE", 1.20),
    ("COUPE", 0.15),
    ("BAGUETTE", 0.90),
    ("BANETTE", 1.05),
    ("CROISSANT", 1.10),
    ("PAIN AU CHOCOLAT", 1.20),
    ("BOULE 400G", 1.50),
    ("CAMPAGNE", 1.60),
    ("TARTELETTE", 2.00),
    ("FORMULE SANDWICH", 7.00),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `lo..hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

/// `1.2` → `"1,20 €"`, the way the till exports prices.
fn euro(price: f64) -> String {
    format!("{price:.2} €").replace('.', ",")
}

/// Quantity sold, with the occasional free item (0) and return (-1).
fn quantity(rng: &mut SimpleRng) -> i64 {
    let roll = rng.next_f64();
    if roll < 0.03 {
        0
    } else if roll < 0.04 {
        -1
    } else {
        rng.range(1, 5) as i64
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let start = NaiveDate::from_ymd_opt(2021, 1, 2).context("invalid start date")?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record([
        "",
        "date",
        "time",
        "ticket_number",
        "article",
        "Quantity",
        "unit_price",
    ])?;

    let mut row_id: u64 = 0;
    let mut ticket: u64 = 150040;

    for day in 0..args.days {
        let date = start
            .checked_add_days(Days::new(day))
            .context("date out of range")?;
        let tickets = rng.range(20, 60);

        for _ in 0..tickets {
            let minutes = rng.range(7 * 60, 20 * 60);
            let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);

            for _ in 0..rng.range(1, 4) {
                let (article, price) = ARTICLES[rng.range(0, ARTICLES.len() as u64) as usize];
                let qty = quantity(&mut rng);
                // Free items are exported with a zero price.
                let unit_price = if qty == 0 { 0.0 } else { price };

                writer.write_record([
                    row_id.to_string(),
                    date.format("%Y-%m-%d").to_string(),
                    time.clone(),
                    format!("{ticket}.0"),
                    article.to_string(),
                    format!("{qty}.0"),
                    euro(unit_price),
                ])?;
                row_id += 1;
            }
            ticket += 1;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {row_id} sale lines over {} days to {}",
        args.days,
        args.output.display()
    );
    Ok(())
}
