//! Property tests for the growth invariants.

use pipes_core::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Scene that only counts what it is sent.
#[derive(Default)]
struct CountingScene {
    containers: u64,
    segments: usize,
    joints: usize,
}

impl Scene for CountingScene {
    fn add_pipe_container(&mut self) -> ContainerHandle {
        self.containers += 1;
        ContainerHandle(self.containers)
    }

    fn remove_pipe_container(&mut self, _container: ContainerHandle) {}

    fn emit_segment(&mut self, _: ContainerHandle, _: IVec3, _: IVec3, _: &PipeMaterial) {
        self.segments += 1;
    }

    fn emit_joint(&mut self, _: ContainerHandle, _: JointKind, _: IVec3, _: Quat, _: &PipeMaterial) {
        self.joints += 1;
    }

    fn set_viewpoint(&mut self, _viewpoint: Viewpoint) {}
}

fn any_direction() -> impl Strategy<Value = Direction> {
    (0usize..3, any::<bool>()).prop_map(|(axis, positive)| Direction::new(Axis::ALL[axis], positive))
}

proptest! {
    #[test]
    fn population_keeps_walk_invariants(seed in any::<u64>(), half in 1i32..4, frames in 1usize..300) {
        let bounds = GridBounds::cube(half).unwrap();
        let options = Options { bounds, ..Options::default() };
        let mut world = World::new(bounds);
        let mut scene = CountingScene::default();
        let mut population = PipePopulation::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..frames {
            population.tick(&options, &mut world, &mut scene, &mut rng);
        }

        let mut claimed = 0;
        for pipe in population.pipes() {
            prop_assert!(!pipe.positions().is_empty());
            prop_assert_eq!(pipe.current_position(), *pipe.positions().last().unwrap());
            for pair in pipe.positions().windows(2) {
                prop_assert!(is_adjacent(pair[0], pair[1]));
            }
            for cell in pipe.positions() {
                prop_assert!(bounds.contains(*cell));
                prop_assert_eq!(world.occupancy().get(*cell), Some(pipe.id()));
            }
            claimed += pipe.positions().len();
        }
        prop_assert_eq!(world.occupancy().len(), claimed);
        prop_assert_eq!(scene.segments, claimed - population.len());
    }

    #[test]
    fn joints_only_where_heading_changes(seed in any::<u64>(), dirs in prop::collection::vec(any_direction(), 1..60)) {
        let mut world = World::new(GridBounds::cube(4).unwrap());
        let mut scene = CountingScene::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pipe = Pipe::seed(
            PipeId(0),
            IVec3::ZERO,
            JointChances::default(),
            PipeMaterial::phong(0x123456),
            &mut world,
            &mut scene,
        )
        .unwrap();

        for dir in dirs {
            let before = pipe.last_direction();
            let len = pipe.positions().len();
            let claimed = world.occupancy().len();
            let outcome = pipe.grow(dir, &mut world, &mut scene, &mut rng);
            if outcome.is_grown() {
                let turned = before.is_some_and(|last| last != dir);
                prop_assert_eq!(outcome.joint().is_some(), turned);
                prop_assert_eq!(pipe.last_direction(), Some(dir));
            } else {
                prop_assert_eq!(pipe.positions().len(), len);
                prop_assert_eq!(world.occupancy().len(), claimed);
                prop_assert_eq!(pipe.last_direction(), before);
            }
        }
    }
}
