use vose_alias::{VoseAlias, read_words, to_distribution};

/// Babble: sample words from a corpus with each word's corpus frequency.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = read_words("corpus/thus.txt")?;
    println!("corpus: {} tokens", words.len());

    let va = VoseAlias::from_dist(to_distribution(words))?;
    println!("distinct words: {}", va.len());

    let mut rng = rand::rng();
    let babble: Vec<String> = va.sample_n_owned(&mut rng, 25);
    println!("{}", babble.join(" "));

    Ok(())
}
