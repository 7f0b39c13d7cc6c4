use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::curve::ClosedCurve;
use super::scene::style;
use super::state::RadialGraphState;

/// Draw one frame: halo, links, nodes, labels, back to front. Positions
/// come from the animation frame, styles from the hover overrides.
pub fn render(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width(), state.height());
	draw_perimeter(state, ctx);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_perimeter(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	let curve = &state.frame.curve;
	if curve.is_empty() {
		return;
	}
	let stroke = state.overrides().curve;

	// Gradient spans the halo's bounding box, top-left to bottom-right.
	let (min, max) = curve.bounds();
	let gradient = ctx.create_linear_gradient(min.x, min.y, max.x, max.y);
	for (offset, color) in style::CURVE_GRADIENT {
		let _ = gradient.add_color_stop(offset as f32, color);
	}

	ctx.save();
	ctx.set_global_alpha(stroke.opacity);
	ctx.set_line_width(stroke.width);
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_shadow_blur(style::CURVE_GLOW);
	ctx.set_shadow_color(style::CURVE_GLOW_COLOR);
	trace_curve(curve, ctx);
	ctx.stroke();
	ctx.restore();
}

fn trace_curve(curve: &ClosedCurve, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	ctx.move_to(curve.start.x, curve.start.y);
	for seg in &curve.segments {
		ctx.bezier_curve_to(seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.to.x, seg.to.y);
	}
	ctx.close_path();
}

fn draw_links(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	let frame = &state.frame;
	for (link, stroke) in state.scene.links.iter().zip(&state.overrides().links) {
		let (from, to) = (frame.position(link.source), frame.position(link.target));
		ctx.set_global_alpha(stroke.opacity);
		ctx.set_line_width(stroke.width);
		ctx.set_stroke_style_str(&link.color);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	for (i, (node, node_style)) in state
		.scene
		.nodes
		.iter()
		.zip(&state.overrides().nodes)
		.enumerate()
	{
		let at = state.frame.position(i);
		ctx.save();
		ctx.set_shadow_blur(node_style.glow);
		ctx.set_shadow_color(&node.color);
		ctx.begin_path();
		let _ = ctx.arc(at.x, at.y, node_style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();
		ctx.restore();
	}
}

fn draw_labels(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	for (label, label_style) in state.scene.labels.iter().zip(&state.overrides().labels) {
		let at = state.frame.label_position(label);
		ctx.set_font(label_style.font());
		ctx.set_fill_style_str(label_style.color);
		ctx.set_text_align(label.anchor.text_align());
		let _ = ctx.fill_text(&label.text, at.x, at.y);
	}
}
