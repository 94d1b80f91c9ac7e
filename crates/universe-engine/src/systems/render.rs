use crate::api::types::BodyKind;
use crate::core::state::SimulationState;
use crate::renderer::instance::{BodyInstance, RenderBuffer};

/// Build the render buffer from the current state.
/// Planets first, then satellites, then nebulas; positions drop to f32 here.
pub fn build_render_buffer(state: &SimulationState, buffer: &mut RenderBuffer) {
    buffer.clear();

    for p in state.planets() {
        buffer.push(instance(p.pos.x, p.pos.y, p.radius, BodyKind::Planet));
    }
    for s in state.satellites() {
        buffer.push(instance(s.pos.x, s.pos.y, s.size, BodyKind::Satellite));
    }
    for n in state.nebulas() {
        buffer.push(instance(n.pos.x, n.pos.y, n.radius, BodyKind::Nebula));
    }

    buffer.set_sections(state.planet_count() as u32, state.satellite_count() as u32);
}

fn instance(x: f64, y: f64, radius: f64, kind: BodyKind) -> BodyInstance {
    BodyInstance {
        x: x as f32,
        y: y as f32,
        radius: radius as f32,
        kind: kind.as_f32(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::nebula::Nebula;
    use crate::components::satellite::Satellite;
    use glam::DVec2;

    #[test]
    fn buffer_groups_by_kind() {
        let mut state = SimulationState::new();
        let id = state.add_planet(DVec2::new(10.0, 20.0), 6.0, None);
        state.add_satellite(Satellite::new(id, DVec2::new(1.0, 1.0)).with_size(1.5));
        state.add_satellite(Satellite::new(id, DVec2::new(2.0, 2.0)));
        state.add_nebula(Nebula::new(DVec2::new(5.0, 5.0), 0.5, 1.0, 0.7, 0.01));

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&state, &mut buffer);

        assert_eq!(buffer.instance_count(), 4);
        assert_eq!(buffer.planets()[0], BodyInstance { x: 10.0, y: 20.0, radius: 6.0, kind: 0.0 });
        assert_eq!(buffer.satellites()[0].radius, 1.5);
        assert_eq!(buffer.nebulas()[0].kind, BodyKind::Nebula.as_f32());
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let mut state = SimulationState::new();
        state.add_planet(DVec2::ZERO, 2.0, None);

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&state, &mut buffer);
        build_render_buffer(&state, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
