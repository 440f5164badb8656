use approx::assert_relative_eq;
use photocell_sim::constants::{ELECTRONS_PER_SPRITE, ELEMENTARY_CHARGE};
use photocell_sim::{MaterialTable, Photocell, PhotocellParams, SimError, Simulation};

const FRAME: f64 = 1.0 / 60.0 * 2e-5;

fn photocell(wave_length: f64) -> Photocell {
    let params = PhotocellParams {
        wave_length,
        ..PhotocellParams::default()
    };
    Photocell::new(&params, MaterialTable::standard())
        .unwrap()
        .with_seed(7)
}

#[test]
fn test_defaults_sit_above_aluminium_cutoff() {
    let mut cell = photocell(515.0);
    assert_eq!(cell.cathode(), "Al");
    assert_eq!(cell.max_wavelength(), 290.0);

    let electrons = cell.advance(FRAME);
    assert!(electrons.is_empty());
    assert_eq!(cell.produced_last_tick(), 0.0);
    assert_eq!(cell.current(), 0.0);
    assert_eq!(cell.electron_count(), 0.0);
}

#[test]
fn test_no_emission_at_or_beyond_cutoff() {
    for wave_length in [290.0, 291.0, 400.0, 750.0] {
        let mut cell = photocell(wave_length);
        for _ in 0..100 {
            assert!(cell.advance(FRAME).is_empty());
            assert_eq!(cell.produced_last_tick(), 0.0);
            assert_eq!(cell.current(), 0.0);
        }
    }
}

#[test]
fn test_production_is_floor_of_flux() {
    let cases = [(2.5e19, FRAME), (1e15, 0.37), (3.3, 1.0), (5e19, 1e-6), (1234.5, 0.01)];
    for (performance, dt) in cases {
        let mut cell = photocell(200.0);
        cell.set_light_performance(performance);
        cell.advance(dt);
        assert_eq!(cell.produced_last_tick(), (performance * dt).floor());
    }
}

#[test]
fn test_current_from_this_tick_only() {
    let mut cell = photocell(200.0);
    cell.advance(FRAME);
    let produced = cell.produced_last_tick();
    assert!(produced > 0.0);
    assert_relative_eq!(cell.current(), produced * ELEMENTARY_CHARGE / FRAME, max_relative = 1e-12);
    assert_relative_eq!(cell.current(), 2.5e19 * ELEMENTARY_CHARGE, max_relative = 1e-6);

    // moving past the cutoff drops the current at once, even with electrons in flight
    cell.set_wave_length(600.0);
    cell.advance(FRAME);
    assert_eq!(cell.current(), 0.0);
}

#[test]
fn test_accumulator_balances_spawns() {
    let mut cell = photocell(200.0);
    let mut total = 0.0;
    let mut spawned = 0usize;
    for _ in 0..500 {
        spawned += cell.advance(FRAME).len();
        total += cell.produced_last_tick();
        assert!(cell.electron_count() >= 0.0);
        assert!(cell.electron_count() < ELECTRONS_PER_SPRITE);
    }
    assert!(spawned > 0);
    assert_eq!(cell.electron_count(), total - ELECTRONS_PER_SPRITE * spawned as f64);
}

#[test]
fn test_ultraviolet_spawns_forward_electrons() {
    let mut cell = photocell(200.0);
    let mut electrons = Vec::new();
    for _ in 0..200 {
        electrons.extend(cell.advance(FRAME));
    }
    assert!(!electrons.is_empty());
    for e in &electrons {
        assert!(e.velocity_x() > 0.0);
        let p = e.position();
        assert_eq!(p.x, 234);
        assert!((121..=211).contains(&p.y));
    }
}

#[test]
fn test_spawn_speed_bounded_by_photon_surplus() {
    let mut cell = photocell(200.0);
    cell.set_light_performance(ELECTRONS_PER_SPRITE * 10.0);
    let electrons = cell.advance(1.0);
    assert_eq!(electrons.len(), 10);

    let kinetic = photocell_sim::physics::photon_energy(200.0) - 0.68e-18;
    let max_speed = photocell_sim::physics::electron_speed(kinetic);
    for e in &electrons {
        assert!(e.velocity_x() <= max_speed * (1.0 + 1e-12));
        assert!(e.velocity_x() >= max_speed * 85f64.to_radians().cos() * (1.0 - 1e-12));
    }
}

#[test]
fn test_seeded_runs_repeat() {
    let run = || {
        let mut cell = photocell(250.0);
        (0..200)
            .flat_map(|_| cell.advance(FRAME))
            .map(|e| (e.velocity_x(), e.position().y))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_non_positive_step_is_ignored() {
    let mut cell = photocell(200.0);
    cell.advance(FRAME);
    let count = cell.electron_count();
    let current = cell.current();
    assert!(cell.advance(0.0).is_empty());
    assert!(cell.advance(-1.0).is_empty());
    assert_eq!(cell.electron_count(), count);
    assert_eq!(cell.current(), current);
}

#[test]
fn test_set_material_refreshes_cutoff() {
    let mut cell = photocell(515.0);
    cell.set_material("Cs").unwrap();
    assert_eq!(cell.cathode(), "Cs");
    assert_eq!(cell.work_function(), 0.31);
    assert_eq!(cell.max_wavelength(), 635.0);

    // 515 nm now frees electrons from caesium
    cell.advance(FRAME);
    assert!(cell.produced_last_tick() > 0.0);
}

#[test]
fn test_unknown_material_leaves_cathode_alone() {
    let mut cell = photocell(515.0);
    let err = cell.set_material("Zz").unwrap_err();
    assert!(matches!(err, SimError::UnknownMaterial(ref code) if code == "Zz"));
    assert_eq!(cell.cathode(), "Al");
    assert_eq!(cell.work_function(), 0.68);
}

#[test]
fn test_unknown_startup_material_fails() {
    let params = PhotocellParams {
        cathode: "Nope".to_string(),
        ..PhotocellParams::default()
    };
    assert!(matches!(
        Photocell::new(&params, MaterialTable::standard()),
        Err(SimError::UnknownMaterial(_))
    ));
}

#[test]
fn test_simulation_step_adopts_spawned_electrons() {
    let mut sim = Simulation::new(photocell(200.0));
    for _ in 0..200 {
        sim.step(FRAME);
    }
    assert!(!sim.electrons.is_empty());
    assert!(sim
        .electrons
        .iter()
        .all(|e| e.state() == photocell_sim::ElectronState::InFlight));
}
