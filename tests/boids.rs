mod tests {
    use hallowgrove::boids::{FlightBox, Flock, FlockParams, ForceWeights};

    fn woodland_params() -> FlockParams {
        FlockParams {
            desired_separation: 4.0,
            neighbor_radius: 8.0,
            max_speed: 1.2,
            max_force: 0.03,
            flight_box: FlightBox {
                left: -10.0,
                right: 42.0,
                top: -5.0,
                bottom: 12.0,
                margin: 8.0,
                push: 0.05,
                bottom_push: 0.1,
            },
            scatter_chance: 0.02,
        }
    }

    #[test]
    fn test_corner_boid_is_pushed_inside() {
        let mut flock = Flock::new(woodland_params(), 1);
        flock.spawn(1, (-10.0, -9.99), (-5.0, -4.99));

        // One second of frames
        for _ in 0..30 {
            flock.step(ForceWeights::FLOCKING);
        }

        let boid = &flock.boids()[0];
        assert!(boid.x > -10.0 && boid.x < 42.0, "x = {}", boid.x);
        assert!(boid.y > -5.0 && boid.y < 12.0, "y = {}", boid.y);
    }

    #[test]
    fn test_speed_stays_capped() {
        let mut flock = Flock::new(woodland_params(), 2);
        flock.spawn(8, (-5.0, 37.0), (-2.0, 10.0));

        for frame in 0..600 {
            let weights = if frame % 120 < 80 {
                ForceWeights::FLOCKING
            } else {
                ForceWeights::SPREADING
            };
            flock.step(weights);
            for boid in flock.boids() {
                let speed = (boid.vx * boid.vx + boid.vy * boid.vy).sqrt();
                assert!(speed <= 1.2 + 1e-4, "speed {speed}");
            }
        }
    }

    #[test]
    fn test_flock_stays_in_expanded_flight_area() {
        let mut flock = Flock::new(woodland_params(), 3);
        flock.spawn(8, (-5.0, 37.0), (-2.0, 10.0));

        for _ in 0..2000 {
            flock.step(ForceWeights::FLOCKING);
        }
        for boid in flock.boids() {
            // Soft boundaries allow brief overshoot but not runaway
            assert!(boid.x > -20.0 && boid.x < 52.0, "x = {}", boid.x);
            assert!(boid.y > -15.0 && boid.y < 22.0, "y = {}", boid.y);
        }
    }

    #[test]
    fn test_wings_flap() {
        let mut flock = Flock::new(woodland_params(), 4);
        flock.spawn(2, (0.0, 10.0), (0.0, 10.0));
        let before: Vec<f32> = flock.boids().iter().map(|b| b.wing_phase).collect();
        flock.step(ForceWeights::FLOCKING);
        for (boid, phase) in flock.boids().iter().zip(before) {
            assert!((boid.wing_phase - phase - 0.2).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spawn_respects_pool_bound() {
        let mut flock = Flock::new(woodland_params(), 5);
        flock.spawn(50, (0.0, 10.0), (0.0, 10.0));
        assert_eq!(flock.boids().len(), 12);
    }
}
