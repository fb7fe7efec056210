use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdtb2::tree::{parse_fragments, Tree};

const FRAGMENTS: &str = "(WHNP-1 (WDT that))|||(NP-SBJ (-NONE- *T*-1))|||(VBD hung)|||(PP-LOC (IN over) (NP (NP (NNS parts)) (PP (IN of) (NP (DT the) (NN factory)))))|||(, ,)";

const SENTENCE: &str = "( (S (NP-SBJ (NP (NNP Pierre) (NNP Vinken)) (, ,) (ADJP (NP (CD 61) (NNS years)) (JJ old)) (, ,)) (VP (MD will) (VP (VB join) (NP (DT the) (NN board)) (PP-CLR (IN as) (NP (DT a) (JJ nonexecutive) (NN director))) (NP-TMP (NNP Nov.) (CD 29)))) (. .)))";

pub fn tree_benchmark(c: &mut Criterion) {
    c.bench_function("parse fragments", |b| {
        b.iter(|| parse_fragments(black_box(FRAGMENTS)))
    });
    c.bench_function("parse sentence", |b| {
        b.iter(|| black_box(SENTENCE).parse::<Tree>())
    });

    let tree: Tree = SENTENCE.parse().unwrap();
    c.bench_function("pretty", |b| b.iter(|| black_box(&tree).pretty()));
}

criterion_group!(benches, tree_benchmark);
criterion_main!(benches);
