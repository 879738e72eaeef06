use brunch::Bench;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gf2sparse::random::{random_matrix, random_row_regular};
use gf2sparse::{concatenate, multiply, multiply_par, transpose, InversePair, SparseMatrix};

fn main() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let p = random_matrix(2000, 2000, 2000, &mut rng);
    let gt = transpose(&concatenate(&SparseMatrix::identity(2000), &p).unwrap());
    let h = concatenate(&transpose(&p), &SparseMatrix::identity(2000)).unwrap();
    let a = random_row_regular(1000, 1000, 10, &mut rng);
    let b = random_row_regular(1000, 1000, 10, &mut rng);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap();

    brunch::benches! {
        inline:
        {
            Bench::new("transpose (2000x4000, 4000 ones)")
            .run_seeded(&h, |h| transpose(h))
        },
        {
            Bench::new("concatenate (2000x2000 | 2000x2000)")
            .run_seeded(&p, |p| concatenate(p, p).unwrap())
        },
        {
            Bench::new("(H 2000x4000) x (GT 4000x2000)")
            .run_seeded((&h, &gt), |(h, gt)| multiply(h, gt).unwrap())
        },
        {
            Bench::new("(sparse 1000x1000, 10/row)^2")
            .run_seeded((&a, &b), |(a, b)| multiply(a, b).unwrap())
        },
        {
            Bench::new("(sparse 1000x1000, 10/row)^2 (4 threads)")
            .run_seeded((&a, &b), |(a, b)| multiply_par(a, b, Some(&pool)).unwrap())
        },
        {
            Bench::new("random invertible pair (size 2000)")
            .run(|| InversePair::random(2000, 2000, 1000, &mut StdRng::seed_from_u64(1)))
        },
    }
}
