use std::collections::HashMap;
use vose_alias::{VoseAlias, VoseEnum, to_distribution};

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, VoseEnum)]
enum LoadedDie {
    #[probability(1/10)]
    One,
    #[probability(1/10)]
    Two,
    #[probability(1/10)]
    Three,
    #[probability(1/10)]
    Four,
    #[probability(1/10)]
    Five,
    #[probability(1/2)]
    Six,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    // A fair die, built from an observed sample of its faces.
    let faces = ["one", "two", "three", "four", "five", "six"];
    let fair: VoseAlias<&str> = VoseAlias::from_dist(to_distribution(faces))?;

    let mut hist: HashMap<&str, u64> = HashMap::default();
    for _ in 0..60_000 {
        *hist.entry(*fair.sample(&mut rng)).or_default() += 1;
    }
    println!("Fair die (60k rolls):");
    let mut v: Vec<_> = hist.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    for (face, count) in v {
        println!("{count:>6} {face}");
    }

    // A loaded die, straight from the enum's annotated probabilities.
    let loaded = LoadedDie::vose()?;
    let mut hist: HashMap<LoadedDie, u64> = HashMap::default();
    for _ in 0..60_000 {
        *hist.entry(loaded.sample_owned(&mut rng)).or_default() += 1;
    }
    println!("\nLoaded die (60k rolls):");
    let mut v: Vec<_> = hist.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    for (face, count) in v {
        println!("{count:>6} {face:?}");
    }

    Ok(())
}
