use game_core::*;
use glam::Vec2;
use hecs::World;

fn setup() -> (World, Config, Score, Events, GameRng) {
    (
        World::new(),
        Config::new(),
        Score::new(),
        Events::new(),
        GameRng::new(12345),
    )
}

#[test]
fn test_ball_exits_left_scores_opponent_and_resets() {
    // Ball at (0, 200) moving (-5, 0) on the 800x400 field: the next tick
    // puts it at (-5, 200), awards the opponent a point, and re-serves.
    let (mut world, config, mut score, mut events, mut rng) = setup();
    create_paddle(&mut world, Side::Left, 170.0);
    create_paddle(&mut world, Side::Right, 170.0);
    create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-5.0, 0.0));

    step(&mut world, &config, &mut score, &mut events, &mut rng);

    assert_eq!(score.opponent, 1);
    assert_eq!(score.player, 0);
    assert!(events.opponent_scored);

    for (_e, ball) in world.query::<&Ball>().iter() {
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0), "Ball reset to center");
        assert_eq!(ball.vel.x.abs(), config.ball_speed, "Re-randomized serve");
    }
}

#[test]
fn test_scoring_is_exclusive_per_tick() {
    let (mut world, config, mut score, mut events, mut rng) = setup();
    create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-5.0, 0.0));

    for _ in 0..50 {
        step(&mut world, &config, &mut score, &mut events, &mut rng);
        assert!(
            !(events.player_scored && events.opponent_scored),
            "A single tick can never award both sides"
        );
    }
}

#[test]
fn test_boundary_collision_flips_ball_rightward() {
    // Ball center exactly on the player paddle rectangle (x in [50, 60],
    // y in [paddle.y, paddle.y + 60]) registers a hit.
    let (mut world, config, mut score, mut events, mut rng) = setup();
    create_paddle(&mut world, Side::Left, 170.0);
    create_paddle(&mut world, Side::Right, 170.0);
    // After the move step the ball lands on the paddle's right edge
    create_ball(&mut world, Vec2::new(65.0, 200.0), Vec2::new(-5.0, 0.0));

    step(&mut world, &config, &mut score, &mut events, &mut rng);

    assert!(events.ball_hit_paddle);
    for (_e, ball) in world.query::<&Ball>().iter() {
        assert!(ball.vel.x > 0.0, "Horizontal velocity sign flips to positive");
        assert!((ball.vel.x - 5.5).abs() < 1e-6, "Magnitude scaled by 1.1");
    }
}

#[test]
fn test_volley_speed_escalates_without_cap() {
    let (mut world, config, mut score, mut events, mut rng) = setup();
    create_paddle(&mut world, Side::Left, 170.0);
    create_ball(&mut world, Vec2::new(60.0, 200.0), Vec2::new(-5.0, 0.0));

    step(&mut world, &config, &mut score, &mut events, &mut rng);
    assert!(events.ball_hit_paddle);

    let mut speed = 0.0;
    for (_e, ball) in world.query::<&Ball>().iter() {
        speed = ball.vel.x;
    }
    assert!((speed - 5.5).abs() < 1e-6);

    // Park the ball back on the paddle; every contact compounds the factor
    for (_e, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = Vec2::new(60.0, 200.0);
        ball.vel = Vec2::new(-speed, 0.0);
    }
    step(&mut world, &config, &mut score, &mut events, &mut rng);

    for (_e, ball) in world.query::<&Ball>().iter() {
        assert!(
            (ball.vel.x - 6.05).abs() < 1e-4,
            "Second hit: 5.0 * 1.1 * 1.1, no cap"
        );
    }
}

#[test]
fn test_opponent_reacts_after_physics() {
    let (mut world, config, mut score, mut events, mut rng) = setup();
    create_paddle(&mut world, Side::Right, 170.0); // center at 200
    // Ball moving down, past the dead-zone once this tick's motion lands
    create_ball(&mut world, Vec2::new(400.0, 240.0), Vec2::new(0.0, 5.0));

    step(&mut world, &config, &mut score, &mut events, &mut rng);

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        assert_eq!(
            paddle.y,
            170.0 + config.opponent_speed,
            "Opponent chased the post-move ball position"
        );
    }
}

#[test]
fn test_full_rally_stays_in_bounds() {
    // Run the session a few hundred ticks and check the invariants the
    // clamps are supposed to hold.
    let mut session = GameSession::new(777);
    session.toggle();

    let config = session.config().clone();
    for i in 0..500 {
        // Wiggle the pointer so the player paddle keeps moving
        session.pointer_moved((i % 400) as f32);
        session.tick();

        let frame = session.frame();
        for y in [frame.player_y, frame.opponent_y] {
            assert!(
                (0.0..=config.field_height - config.paddle_height).contains(&y),
                "Paddle out of bounds at tick {}: {}",
                i,
                y
            );
        }
    }
}

#[test]
fn test_reset_stops_simulation() {
    let mut session = GameSession::new(42);
    session.toggle();
    for _ in 0..20 {
        session.tick();
    }
    session.toggle(); // reset

    let at_reset = session.frame();
    for _ in 0..20 {
        session.tick();
    }
    let later = session.frame();

    assert_eq!(at_reset.ball_pos, later.ball_pos, "Ticks ignored after reset");
    assert_eq!(session.score().player, 0);
    assert_eq!(session.score().opponent, 0);
}
