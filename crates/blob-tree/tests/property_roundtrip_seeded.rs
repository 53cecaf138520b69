use blob_tree::{codec, Node};

#[test]
fn property_roundtrip_holds_for_seeded_trees() {
    for seed in seeds() {
        let tree = random_tree(seed, 4);
        let bytes = codec::encode(&tree);
        let back = codec::decode(&bytes).expect("decode must succeed");
        assert_eq!(back, tree, "roundtrip mismatch seed={seed}");

        let again = codec::encode(&back);
        assert_eq!(again, bytes, "re-encode not idempotent seed={seed}");
    }
}

#[test]
fn property_consumed_equals_length_for_seeded_trees() {
    for seed in seeds() {
        let tree = random_tree(seed, 3);
        let bytes = codec::encode(&tree);
        let (_, consumed) = codec::decode_with_consumed(&bytes).expect("decode must succeed");
        assert_eq!(consumed, bytes.len(), "partial consumption seed={seed}");
    }
}

fn seeds() -> [u64; 16] {
    [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_0000_00ff_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
        0x0000_0000_0000_1001_u64,
        0x0000_0000_0000_2002_u64,
        0x0000_0000_0000_3003_u64,
        0x1111_2222_3333_4444_u64,
        0x2222_3333_4444_5555_u64,
        0x89ab_cdef_0123_4567_u64,
        0xfedc_ba98_7654_3210_u64,
        0x1357_9bdf_2468_ace0_u64,
        0x0f0f_f0f0_55aa_aa55_u64,
        0xa5a5_5a5a_dead_beef_u64,
        0x4444_5555_6666_7777_u64,
    ]
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn range(&mut self, n: u64) -> u64 {
        if n == 0 {
            0
        } else {
            self.next_u64() % n
        }
    }
}

fn random_scalar(rng: &mut Lcg) -> Node {
    match rng.range(6) {
        0 => Node::Null,
        1 => Node::Bool(rng.range(2) == 1),
        2 => Node::Int((rng.range(2000) as i64) - 1000),
        // Finite floats only: NaN breaks structural equality by design.
        3 => Node::Float((rng.range(4000) as f64 - 2000.0) / 8.0),
        4 => Node::Str(format!("s{}", rng.range(100))),
        _ => {
            let len = rng.range(16) as usize;
            Node::Bin((0..len).map(|_| rng.range(256) as u8).collect())
        }
    }
}

fn random_node(rng: &mut Lcg, depth: usize) -> Node {
    if depth == 0 {
        return random_scalar(rng);
    }
    match rng.range(4) {
        0 => random_scalar(rng),
        1 => {
            let len = rng.range(4) as usize;
            let mut arr = Node::array();
            for _ in 0..len {
                arr.push(random_node(rng, depth - 1)).unwrap();
            }
            arr
        }
        _ => random_object(rng, depth - 1),
    }
}

fn random_object(rng: &mut Lcg, depth: usize) -> Node {
    let len = (1 + rng.range(4)) as usize;
    let mut obj = Node::object();
    for i in 0..len {
        obj.set(format!("k{}", i), random_node(rng, depth)).unwrap();
    }
    obj
}

fn random_tree(seed: u64, depth: usize) -> Node {
    let mut rng = Lcg::new(seed);
    random_object(&mut rng, depth)
}
