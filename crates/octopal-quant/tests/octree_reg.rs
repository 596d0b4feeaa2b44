//! Octree accumulator regression test
//!
//! Exercises the tree directly: leaf bookkeeping across reductions, the
//! reduction order, and palette lookups.

use octopal_core::color::{self, compose_rgb};
use octopal_quant::{LeafStats, Octree};
use octopal_test::{RegParams, gradient_image};

fn fill(tree: &mut Octree, pixels: impl IntoIterator<Item = u32>) -> u64 {
    let mut n = 0;
    for pixel in pixels {
        tree.add_color(pixel);
        n += 1;
    }
    n
}

#[test]
fn octree_reduction_reg() {
    let mut rp = RegParams::new("octree_reduction");

    let src = gradient_image(48, 40);
    let mut tree = Octree::new(8).unwrap();
    let fed = fill(&mut tree, src.data().iter().copied());
    rp.compare_values(fed as f64, tree.leaf_pixel_count() as f64, 0.0);
    rp.compare_values(tree.leaf_count() as f64, tree.leaf_stats().len() as f64, 0.0);
    let summed: u64 = tree.leaf_stats().iter().map(|s| s.pixel_count).sum();
    rp.compare_values(summed as f64, tree.leaf_pixel_count() as f64, 0.0);

    // Leaf count never grows and pixels are never lost
    let mut monotone = true;
    let mut conserved = true;
    let mut last = tree.leaf_count();
    let mut steps = 0;
    while tree.reduce() {
        monotone &= tree.leaf_count() <= last;
        conserved &= tree.leaf_pixel_count() == fed;
        last = tree.leaf_count();
        steps += 1;
    }
    rp.check(monotone);
    rp.check(conserved);
    rp.check(steps > 0);
    rp.compare_values(1.0, tree.leaf_count() as f64, 0.0);

    assert!(rp.cleanup(), "octree_reduction regression test failed");
}

#[test]
fn octree_palette_target_reg() {
    let mut rp = RegParams::new("octree_palette_target");

    let src = gradient_image(40, 40);
    for target in [1usize, 7, 31, 100, 254] {
        let mut tree = Octree::new(8).unwrap();
        fill(&mut tree, src.data().iter().copied());
        let palette = tree.build_palette(target);
        rp.check(palette.len() <= target);
        rp.compare_values(tree.leaf_count() as f64, palette.len() as f64, 0.0);

        // Every palette color is the matching leaf's average, fully opaque
        let stats: Vec<LeafStats> = tree.leaf_stats();
        rp.check(stats.iter().map(|s| s.color).eq(palette.iter().copied()));
        rp.check(palette.iter().all(|&c| color::alpha(c) == 255));

        // Lookups are stable and stay inside the palette
        let mut stable = true;
        for &pixel in src.data() {
            let index = tree.palette_index(pixel);
            stable &= index < palette.len() && tree.palette_index(pixel) == index;
        }
        rp.check(stable);
    }

    assert!(rp.cleanup(), "octree_palette_target regression test failed");
}

#[test]
fn octree_depth_reg() {
    let mut rp = RegParams::new("octree_depth");

    let src = gradient_image(32, 32);
    let mut distinct: Vec<u32> = src.data().to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    for bits in 1..=8u32 {
        let mut tree = Octree::new(bits).unwrap();
        fill(&mut tree, src.data().iter().copied());
        rp.check(tree.leaf_count() <= distinct.len());
        // At most 8^bits leaves can exist at this depth
        rp.check(tree.leaf_count() <= 8usize.pow(bits));
    }

    let mut tree = Octree::new(8).unwrap();
    fill(&mut tree, src.data().iter().copied());
    rp.compare_values(distinct.len() as f64, tree.leaf_count() as f64, 0.0);

    assert!(rp.cleanup(), "octree_depth regression test failed");
}

#[test]
fn octree_reduce_order_reg() {
    let mut rp = RegParams::new("octree_reduce_order");

    // Two depth-1 nodes with two leaves each. Reducing to three leaves
    // merges whichever of them was created last.
    let first = [compose_rgb(0, 0, 255), compose_rgb(0, 64, 255)];
    let second = [compose_rgb(255, 0, 0), compose_rgb(255, 0, 64)];

    let mut tree = Octree::new(2).unwrap();
    fill(&mut tree, first.iter().chain(second.iter()).copied());
    let expected = vec![
        compose_rgb(0, 0, 255),
        compose_rgb(0, 64, 255),
        compose_rgb(255, 0, 32),
    ];
    rp.check(tree.build_palette(3) == expected);

    let mut tree = Octree::new(2).unwrap();
    fill(&mut tree, second.iter().chain(first.iter()).copied());
    let expected = vec![
        compose_rgb(0, 32, 255),
        compose_rgb(255, 0, 0),
        compose_rgb(255, 0, 64),
    ];
    rp.check(tree.build_palette(3) == expected);

    assert!(rp.cleanup(), "octree_reduce_order regression test failed");
}
