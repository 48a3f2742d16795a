use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

use chitbox::config::ExplorerConfig;
use chitbox::interaction::PointerEvent;
use chitbox::parts::PartId;
use chitbox::scene::{Node, Scene};
use chitbox::{Explorer, FrameClock};

fn toolbox() -> (Scene, Explorer) {
    let config = ExplorerConfig::toolbox();
    let mut scene = Scene::new();
    for spec in &config.parts {
        scene.add_node(Node::new(spec.id.as_str()));
    }
    let mut explorer = Explorer::new(config).expect("toolbox preset is valid");
    scene.set_camera(explorer.initial_camera());
    explorer.on_scene_ready(&scene);
    (scene, explorer)
}

fn click(scene: &mut Scene, explorer: &mut Explorer, name: &str, now: Duration) {
    let node = scene.find_by_name(name).expect("part in scene");
    explorer.on_click(scene, PointerEvent::new(PartId::new(name), node), now);
}

fn tween_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Explorer");

    // Every drawer and chit in flight at once, sampled mid-tween.
    group.bench_function("update_drawer_group_midflight", |b| {
        let (mut scene, mut explorer) = toolbox();
        click(&mut scene, &mut explorer, "Cube034", Duration::ZERO);
        b.iter(|| explorer.update(black_box(&mut scene), black_box(Duration::from_millis(400))));
    });

    group.bench_function("open_close_drawer_group", |b| {
        let (mut scene, mut explorer) = toolbox();
        let mut clock = FrameClock::new();
        b.iter(|| {
            let now = clock.advance(Duration::from_millis(16));
            click(&mut scene, &mut explorer, "Cube034", now);
            explorer.update(&mut scene, now);
            black_box(explorer.drain_events())
        });
    });

    group.finish();
}

criterion_group!(benches, tween_benchmark_fn);
criterion_main!(benches);
