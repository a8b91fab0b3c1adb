use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqtrie::{ShortTrie, Trie};

/// Deterministic corpus with heavy prefix sharing, the shape tries are for.
fn corpus() -> Vec<String> {
    let stems = [
        "app", "band", "cart", "door", "earth", "flame", "grove", "hill", "iron", "jade",
    ];
    let tails = [
        "", "le", "les", "lication", "er", "ers", "ing", "ed", "stone", "ward", "lands", "s",
    ];
    stems
        .iter()
        .flat_map(|stem| tails.iter().map(move |tail| format!("{stem}{tail}")))
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let words = corpus();

    c.bench_function("trie_insert", |b| {
        b.iter(|| {
            let mut trie: Trie<char> = Trie::new();
            for word in &words {
                trie.insert(black_box(word).chars());
            }
            trie
        })
    });

    c.bench_function("short_trie_insert", |b| {
        b.iter(|| {
            let mut trie: ShortTrie<char> = ShortTrie::new();
            for word in &words {
                trie.insert(black_box(word).chars());
            }
            trie
        })
    });
}

fn bench_contains(c: &mut Criterion) {
    let words = corpus();
    let trie: Trie<char> = words.iter().map(|w| w.chars()).collect();
    let short: ShortTrie<char> = words.iter().map(|w| w.chars()).collect();

    c.bench_function("trie_contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| trie.contains(black_box(word).chars()))
                .count()
        })
    });

    c.bench_function("short_trie_contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| short.contains(black_box(word).chars()))
                .count()
        })
    });
}

fn bench_auto_complete(c: &mut Criterion) {
    let words = corpus();
    let trie: Trie<char> = words.iter().map(|w| w.chars()).collect();
    let short: ShortTrie<char> = words.iter().map(|w| w.chars()).collect();

    c.bench_function("trie_auto_complete", |b| {
        b.iter(|| {
            trie.auto_complete::<_, String>(black_box("app").chars(), 8)
                .collect::<Vec<_>>()
        })
    });

    c.bench_function("short_trie_auto_complete", |b| {
        b.iter(|| {
            short
                .auto_complete::<_, String>(black_box("app").chars(), 8)
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_insert, bench_contains, bench_auto_complete);
criterion_main!(benches);
