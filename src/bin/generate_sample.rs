use course_scout::data::model::{Course, Format, Level};

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

    /// Uniform pick from 0..bound.
    fn pick(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let categories = ["ml", "nlp", "cv", "data-engineering"];
    let providers = ["Нетология", "Skillbox", "Яндекс Практикум", "Stepik"];
    let durations = ["1 месяц", "2 месяца", "4 месяца", "6 месяцев", "1 год"];
    let tag_pool = ["python", "pytorch", "tensorflow", "sql", "llm", "mlops"];

    let mut courses = Vec::new();

    for (i, &category) in categories.iter().enumerate() {
        for (j, level) in Level::ALL.into_iter().enumerate() {
            for (k, format) in Format::ALL.into_iter().enumerate() {
                let n = i * Level::ALL.len() * Format::ALL.len()
                    + j * Format::ALL.len()
                    + k;

                // Roughly a third free, the rest between 4 900 and 154 900.
                let price_from = if rng.pick(3) == 0 {
                    0
                } else {
                    4_900 + rng.pick(150) as u32 * 1_000
                };

                let mut tags = vec![tag_pool[rng.pick(tag_pool.len())].to_string()];
                let second = tag_pool[rng.pick(tag_pool.len())].to_string();
                if second != tags[0] {
                    tags.push(second);
                }

                courses.push(Course {
                    slug: format!("{category}-{}-{}", level.code(), format.code()),
                    title: format!("Курс {n}: {category} ({})", level.label()),
                    provider: providers[rng.pick(providers.len())].to_string(),
                    category: category.to_string(),
                    level,
                    format,
                    price_from,
                    duration: durations[rng.pick(durations.len())].to_string(),
                    tags,
                    short_desc: format!("Практический курс по {category}."),
                });
            }
        }
    }

    let output_path = "sample_catalog.json";
    let json = serde_json::to_string_pretty(&courses).expect("Failed to serialize catalog");
    std::fs::write(output_path, json).expect("Failed to write output file");

    println!("Wrote {} courses to {output_path}", courses.len());
}
