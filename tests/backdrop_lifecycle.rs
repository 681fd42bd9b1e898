use consulting_site::domain::backdrop::{
    Backdrop, BackdropConfig, BackdropState, MAX_FRAME_STEP, PagePreset, Viewport,
};
use consulting_site::infrastructure::render::HeadlessHost;

fn run_frames(backdrop: &mut Backdrop<&mut HeadlessHost>, start: f64, frames: u32, step: f64) {
    for i in 0..frames {
        backdrop.host_mut().fire_pending_frames();
        backdrop.on_frame(start + f64::from(i) * step);
    }
}

#[test]
fn test_repeated_mount_unmount_leaks_nothing() {
    let mut host = HeadlessHost::new(Viewport::new(1280, 720));

    for cycle in 0..25 {
        let preset = PagePreset::ALL[cycle % PagePreset::ALL.len()];
        let mut backdrop = Backdrop::new(&mut host, preset.config())
            .unwrap()
            .with_seed(cycle as u64);

        assert!(backdrop.activate());
        run_frames(&mut backdrop, 0.0, 5, 1.0 / 60.0);
        backdrop.deactivate();
    }

    assert_eq!(host.held_resources(), 0);
    assert_eq!(host.live_contexts(), 0);
    assert_eq!(host.resize_listener_count(), 0);
    assert_eq!(host.pending_frame_count(), 0);
}

#[test]
fn test_small_cloud_stays_in_bounds_and_unmounts_cleanly() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));

    {
        let mut backdrop = Backdrop::new(&mut host, BackdropConfig::new(240, 300.0))
            .unwrap()
            .with_seed(5);
        assert!(backdrop.activate());
        assert_eq!(backdrop.host().container_child_count(), 1);

        let scene = backdrop.scene().unwrap();
        assert_eq!(scene.buffers().len(), 240);
        assert!(scene.base_buffers().max_abs_coordinate() <= 150.0);

        backdrop.deactivate();
        assert_eq!(backdrop.host().container_child_count(), 0);
    }

    assert_eq!(host.held_resources(), 0);
}

#[test]
fn test_drop_without_deactivate_releases_everything() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));

    {
        let mut backdrop = Backdrop::new(&mut host, PagePreset::Contact.config()).unwrap();
        assert!(backdrop.activate());
        run_frames(&mut backdrop, 1.0, 3, 0.016);
    }

    assert_eq!(host.held_resources(), 0);
}

#[test]
fn test_resize_after_unmount_is_harmless() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));

    {
        let mut backdrop = Backdrop::new(&mut host, BackdropConfig::new(50, 20.0)).unwrap();
        assert!(backdrop.activate());
        backdrop.deactivate();

        assert_eq!(backdrop.host_mut().set_viewport(Viewport::new(400, 300)), 0);
        backdrop.on_resize();
        backdrop.on_frame(2.0);
        assert_eq!(backdrop.state(), BackdropState::Inactive);
    }

    assert_eq!(host.held_resources(), 0);
}

#[test]
fn test_resize_updates_context_and_camera() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut backdrop = Backdrop::new(&mut host, BackdropConfig::new(50, 20.0)).unwrap();
    assert!(backdrop.activate());

    assert_eq!(backdrop.host_mut().set_viewport(Viewport::new(1000, 500)), 1);
    backdrop.on_resize();

    let aspect = backdrop.scene().unwrap().camera().aspect;
    assert!((aspect - 2.0).abs() < 1e-6);
}

#[test]
fn test_detached_container_skips_activation() {
    let mut host = HeadlessHost::detached(Viewport::new(800, 600));

    {
        let mut backdrop = Backdrop::new(&mut host, BackdropConfig::default()).unwrap();
        assert!(!backdrop.activate());
        assert_eq!(backdrop.state(), BackdropState::Inactive);

        backdrop.host_mut().attach_container();
        assert!(backdrop.activate());
    }

    assert_eq!(host.held_resources(), 0);
}

#[test]
fn test_long_pause_advances_at_most_one_step() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));
    let mut backdrop = Backdrop::new(&mut host, PagePreset::Home.config()).unwrap();
    assert!(backdrop.activate());

    backdrop.host_mut().fire_pending_frames();
    backdrop.on_frame(10.0);
    backdrop.host_mut().fire_pending_frames();
    backdrop.on_frame(40.0);

    let elapsed = f64::from(backdrop.scene().unwrap().elapsed());
    assert!((elapsed - MAX_FRAME_STEP).abs() < 1e-6);
}

#[test]
fn test_animation_rate_independent_of_frame_rate() {
    let run = |fps: f64| {
        let mut host = HeadlessHost::new(Viewport::new(800, 600));
        let mut backdrop = Backdrop::new(&mut host, PagePreset::Home.config())
            .unwrap()
            .with_seed(3);
        assert!(backdrop.activate());

        let frames = (fps * 2.0) as u32 + 1;
        run_frames(&mut backdrop, 0.0, frames, 1.0 / fps);
        let rotation = backdrop.scene().unwrap().rotation();
        rotation
    };

    let at_30 = run(30.0);
    let at_120 = run(120.0);

    for axis in 0..3 {
        assert!((at_30[axis] - at_120[axis]).abs() < 1e-3, "axis {axis}");
    }
}

#[test]
fn test_frames_driven_without_firing_leave_no_pending_callbacks() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600));

    {
        let mut backdrop = Backdrop::new(&mut host, BackdropConfig::new(30, 20.0)).unwrap();
        assert!(backdrop.activate());

        backdrop.on_frame(0.0);
        backdrop.on_frame(0.016);
        backdrop.on_frame(0.032);
        assert_eq!(backdrop.host().pending_frame_count(), 1);

        backdrop.deactivate();
    }

    assert_eq!(host.held_resources(), 0);
}
