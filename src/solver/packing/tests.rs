use {
  super::*,
  crate::geometry::Canvas,
  itertools::Itertools,
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
};

fn small_config() -> Config {
  Config::default()
    .with_max_alive(20)
    .with_max_total(400)
    .with_seed(0)
}

fn assert_packed(discs: &[Disc], padding: i32, canvas: Canvas) {
  discs.iter().enumerate().tuple_combinations().for_each(|((i, a), (j, b))| {
    assert!(
      !circles_collide(&a.circle, &b.circle, padding as i64),
      "#{i} {:?} overlaps #{j} {:?}", a.circle, b.circle
    );
  });
  discs.iter().for_each(|disc| {
    let Circle { xy, r } = disc.circle;
    assert!(xy.x - r - padding >= 0 && xy.y - r - padding >= 0, "{:?}", disc.circle);
    assert!(xy.x + r + padding < canvas.width && xy.y + r + padding < canvas.height, "{:?}", disc.circle);
  });
}

#[test] fn single_box_grows_to_nearest_wall() {
  let config = Config::default()
    .with_max_alive(1)
    .with_max_total(1)
    .with_min_radius(5)
    .with_padding(2)
    .with_grow_by(1);

  for seed in 0..16 {
    let mut packing = Packing::new(config.with_seed(seed), Canvas::new(100, 100));
    let discs = packing.run();
    assert_eq!(discs.len(), 1);

    let Disc { circle: Circle { xy, r }, alive } = discs[0];
    assert!(!alive);
    let nearest_wall = [xy.x, xy.y, 99 - xy.x, 99 - xy.y].into_iter().min().unwrap();
    assert_eq!(r, nearest_wall - 2, "seed {seed}: {:?}", discs[0]);
    assert_eq!(packing.stats().termination, Some(Termination::TotalReached));
  }
}

#[test] fn final_collection_is_packed() {
  for (seed, canvas) in [(0, Canvas::new(200, 150)), (1, Canvas::new(64, 256)), (2, Canvas::new(128, 128))] {
    let config = small_config().with_seed(seed);
    let mut packing = Packing::new(config, canvas);
    let discs = packing.run();
    assert!(!discs.is_empty());
    assert_packed(discs, config.padding, canvas);
  }
}

#[test] fn packed_without_padding() {
  let config = small_config().with_padding(0).with_grow_by(3).with_min_radius(2);
  let canvas = Canvas::new(120, 90);
  let mut packing = Packing::new(config, canvas);
  assert_packed(packing.run(), 0, canvas);
}

#[test] fn packed_between_every_tick() {
  let config = small_config().with_max_total(150);
  let canvas = Canvas::new(96, 96);
  let mut packing = Packing::new(config, canvas);
  while !packing.is_finished() {
    packing.tick();
    assert_packed(packing.discs(), config.padding, canvas);
    assert_eq!(
      packing.alive_count(),
      packing.discs().iter().filter(|disc| disc.alive).count()
    );
  }
}

#[test] fn radius_is_monotonic_and_dead_boxes_are_frozen() {
  let config = small_config().with_grow_by(2);
  let mut packing = Packing::new(config, Canvas::new(160, 120));
  let mut previous: Vec<Disc> = vec![];

  while !packing.is_finished() {
    packing.tick();
    let current = packing.discs();
    assert!(current.len() >= previous.len());
    previous.iter().zip(current).for_each(|(before, after)| {
      assert_eq!(before.circle.xy, after.circle.xy);
      assert!(after.circle.r >= before.circle.r);
      if !before.alive {
        assert_eq!(before, after);
      }
    });
    previous = current.to_vec();
  }
}

#[test] fn total_is_bounded() {
  for max_total in [0, 1, 7, 30] {
    let config = small_config().with_max_alive(4).with_max_total(max_total);
    let mut packing = Packing::new(config, Canvas::new(300, 300));
    assert!(packing.run().len() <= max_total);
  }
}

#[test] fn zero_total_creates_nothing() {
  let mut packing = Packing::new(small_config().with_max_total(0), Canvas::new(100, 100));
  assert!(packing.run().is_empty());
  assert_eq!(packing.stats(), Stats {
    boxes: 0,
    ticks: 1,
    termination: Some(Termination::TotalReached)
  });
}

#[test] fn canvas_too_small_for_padding() {
  let config = small_config().with_padding(10);
  let mut packing = Packing::new(config, Canvas::new(20, 400));
  assert!(packing.run().is_empty());
  assert_eq!(packing.stats().termination, Some(Termination::SpawnExhausted));
}

/// A failed spawn ends the run at once, even though a box is still alive.
#[test] fn exhausted_spawn_stops_growth() {
  // room for exactly one radius-1 box with padding 2
  let config = Config::default()
    .with_max_alive(2)
    .with_min_radius(1)
    .with_padding(2)
    .with_seed(3);
  let mut packing = Packing::new(config, Canvas::new(10, 8));
  let discs = packing.run().to_vec();

  assert_eq!(discs.len(), 1);
  assert!(discs[0].alive);
  assert_eq!(discs[0].circle.r, 1);
  assert_eq!(packing.stats(), Stats {
    boxes: 1,
    ticks: 1,
    termination: Some(Termination::SpawnExhausted)
  });

  packing.tick();
  assert_eq!(packing.discs(), discs.as_slice());
  assert_eq!(packing.stats().ticks, 1);
}

#[test] fn same_seed_same_packing() {
  let canvas = Canvas::new(128, 96);
  let a = Packing::new(small_config().with_seed(42), canvas).run().to_vec();
  let b = Packing::new(small_config().with_seed(42), canvas).run().to_vec();
  assert_eq!(a, b);
}

#[test] fn legality_excludes_self_by_index() {
  let canvas = Canvas::new(100, 100);
  let disc = Disc { circle: Circle::new(50, 50, 5), alive: true };

  assert!(is_legal(&disc.circle, Some(0), 1, &[disc], canvas));
  assert!(!is_legal(&disc.circle, None, 1, &[disc], canvas));
  // an identical twin at another index is still an obstacle
  assert!(!is_legal(&disc.circle, Some(0), 1, &[disc, disc], canvas));
}

#[test] fn legality_checks_bounds_first() {
  let canvas = Canvas::new(100, 100);
  assert!(!is_legal(&Circle::new(3, 50, 5), None, 0, &[], canvas));
  assert!(is_legal(&Circle::new(5, 50, 5), None, 0, &[], canvas));
}

#[test] fn parallel_scan_matches_sequential() {
  let canvas = Canvas::new(1000, 1000);
  // 50 x 50 lattice of radius-3 discs, 20px apart
  let discs = itertools::iproduct!(0..50, 0..50)
    .map(|(i, j)| Disc { circle: Circle::new(10 + i * 20, 10 + j * 20, 3), alive: false })
    .collect::<Vec<_>>();
  assert!(discs.len() >= PAR_SCAN_THRESHOLD);

  itertools::iproduct!([20, 25, 31, 500], [20, 27, 500], [1, 4, 9], [0, 2, 6])
    .for_each(|(x, y, r, increment)| {
      let candidate = Circle::new(x, y, r);
      let expected = in_bounds(&candidate, increment, canvas) && discs.iter()
        .all(|other| !circles_collide(&candidate, &other.circle, increment));
      assert_eq!(is_legal(&candidate, None, increment, &discs, canvas), expected, "{candidate:?}");
    });
}

#[test] fn debug_reports_storage() {
  let mut packing = Packing::new(small_config(), Canvas::new(64, 64));
  packing.run();
  let debug = format!("{packing:?}");
  assert!(debug.contains("boxes"));
  assert!(debug.contains("storage"));
}

#[test] fn extreme_margins_finish_cleanly() {
  let canvas = Canvas::new(100, 100);
  let base = Config::default().with_seed(1);

  // every box freezes at its spawn radius
  let mut packing = Packing::new(base.with_grow_by(i32::MAX), canvas);
  let discs = packing.run().to_vec();
  assert!(!discs.is_empty());
  assert!(discs.iter().all(|disc| disc.circle.r == base.min_radius));
  assert_packed(&discs, base.padding, canvas);
  assert_eq!(packing.stats().termination, Some(Termination::SpawnExhausted));

  for config in [base.with_padding(i32::MAX), base.with_min_radius(i32::MAX)] {
    let mut packing = Packing::new(config, canvas);
    assert!(packing.run().is_empty(), "{config:?}");
    assert_eq!(packing.stats(), Stats { boxes: 0, ticks: 1, termination: Some(Termination::SpawnExhausted) });
  }
}

#[test] fn storage_is_capped_by_total() {
  let config = Config::default()
    .with_max_alive(usize::MAX)
    .with_max_total(5)
    .with_seed(3);
  let mut packing = Packing::new(config, Canvas::new(100, 100));
  assert!(packing.discs.capacity() >= 5);
  assert!(packing.discs.capacity() < usize::MAX / 2);

  assert!(packing.run().len() <= 5);
  assert!(packing.discs.capacity() >= packing.discs.len());
}

#[test] fn storage_grows_by_half_plus_slack() {
  let config = small_config();
  let mut packing = Packing::new(config, Canvas::new(256, 256));
  let mut capacity = packing.discs.capacity();
  assert!(capacity >= 2 * config.max_alive);

  let mut grown = 0;
  while !packing.is_finished() {
    packing.tick();
    let next = packing.discs.capacity();
    assert!(next >= capacity, "storage shrank from {capacity} to {next}");
    if next != capacity {
      assert!(next >= capacity + capacity / 2 + GROWTH_SLACK, "{capacity} -> {next}");
      grown += 1;
    }
    assert!(next >= packing.discs.len());
    capacity = next;
  }
  assert!(grown > 0, "{} boxes never outgrew {capacity}", packing.discs.len());
}

#[test] fn spawn_gives_up_after_fixed_attempts() {
  assert_eq!(SPAWN_ATTEMPTS, 100);

  // candidates are drawn from 2..98, but a radius 60 box never fits
  let config = Config::default()
    .with_min_radius(60)
    .with_seed(9);
  let mut packing = Packing::new(config, Canvas::new(100, 100));
  packing.tick();
  assert!(packing.discs().is_empty());
  assert_eq!(packing.stats().termination, Some(Termination::SpawnExhausted));

  let after = |attempts: usize| {
    let mut rng = Pcg64::seed_from_u64(9);
    for _ in 0..attempts {
      rng.gen_range(2..98);
      rng.gen_range(2..98);
    }
    rng.gen::<u64>()
  };
  let next = packing.rng.gen::<u64>();
  assert_eq!(next, after(SPAWN_ATTEMPTS));
  assert_ne!(next, after(SPAWN_ATTEMPTS - 1));
}
