use leptos::prelude::*;

use crate::components::radial_graph::{
	CenterItem, Group, Item, RadialData, RadialGraphCanvas, RadialGraphConfig,
};

const PURPLE: &str = "#a87ffb";
const BLUE: &str = "#4facfe";
const RED: &str = "#ff4b4b";

/// Skills shown around the center node, in declaration order.
pub fn skills_data() -> RadialData {
	let bucket = |group: Group, color: &str, ids: &[&str]| -> Vec<Item> {
		ids.iter().map(|id| Item::new(*id, group, color)).collect()
	};

	let mut items = bucket(
		Group::Purple,
		PURPLE,
		&[
			"Purple Team Exercises",
			"Network Telemetry",
			"Endpoint Telemetry",
			"Detection Gap Analysis",
			"Threat Modeling",
			"Active Directory Attacks & Defense",
			"Detection Engineering",
			"Adversary Emulation & Malware Analysis",
		],
	);
	items.extend(bucket(
		Group::Blue,
		BLUE,
		&[
			"Threat Hunting",
			"Digital Forensics and Incident Response",
			"SOC Operations",
			"Incident Handling",
			"Vulnerability/Risk communication",
		],
	));
	items.extend(bucket(
		Group::Red,
		RED,
		&[
			"Reverse Engineering",
			"Evasion Techniques",
			"Command & Control (C2) Operations",
			"Vulnerability Assessment",
			"Red Team Assessments",
			"Red-Blue Collaboration",
			"Penetration Testing",
			"Manual & automated exploitation",
		],
	));

	RadialData {
		center: CenterItem {
			id: "Center".into(),
			color: "#6b72ff".into(),
		},
		items,
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(skills_data);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="skills-graph">
				<RadialGraphCanvas data=graph_data config=RadialGraphConfig::default() />
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dataset_has_twenty_one_skills() {
		let data = skills_data();
		assert_eq!(data.items.len(), 21);
		let count = |g: Group| data.items.iter().filter(|i| i.group == g).count();
		assert_eq!((count(Group::Red), count(Group::Blue), count(Group::Purple)), (8, 5, 8));
	}

	#[test]
	fn colors_match_groups() {
		for item in skills_data().items {
			let expected = match item.group {
				Group::Red => RED,
				Group::Blue => BLUE,
				Group::Purple => PURPLE,
			};
			assert_eq!(item.color, expected);
		}
	}

	#[test]
	fn labels_are_unique() {
		let data = skills_data();
		let mut ids: Vec<_> = data.items.iter().map(|i| i.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), data.items.len());
	}

	#[test]
	fn page_config_sizes_a_desktop_canvas() {
		let config = RadialGraphConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.canvas_size(1280.0).unwrap(), (960.0, 700.0));
	}
}
