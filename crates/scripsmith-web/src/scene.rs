//! 3D decoration scenes rendered behind the page

use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;

use scripsmith_core::content::{ORBIT_LOGOS, SHOWCASE_PANELS};
use scripsmith_core::theme::{palette, Rgba};
use scripsmith_core::{float_offset, particle_field, LoopWave};

use crate::app::{ShowcaseAnchor, Showcases};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                align_showcases,
                animate_hero_field,
                animate_drifters,
                animate_orbit_logos,
                animate_skill_panels,
                animate_contact_orb,
            ),
        );
    }
}

/// Distance from the backdrop camera to the z=0 plane the groups sit on
const CAMERA_DISTANCE: f32 = 9.0;
const CAMERA_FOV_DEGREES: f32 = 50.0;

const PARTICLE_COUNT: usize = 2000;
const FIELD_EXTENT: f32 = 4.0;
const FIELD_SEED: u64 = 21;

/// Floating accent cubes in the hero backdrop
const DRIFTERS: [([f32; 3], Rgba); 3] = [
    ([-3.0, 1.2, -2.0], palette::BLUE),
    ([3.0, -0.8, -3.0], palette::PURPLE),
    ([2.0, 1.6, -4.0], palette::GREEN),
];

/// Colored fills lighting the skills panels
const PANEL_LIGHTS: [([f32; 3], Rgba); 3] = [
    ([4.0, 4.0, 4.0], palette::BLUE),
    ([-4.0, -4.0, -4.0], palette::PURPLE),
    ([0.0, 4.0, -4.0], palette::GREEN),
];

const ORB_BREATH: LoopWave = LoopWave::new(4.0);

/// Marker component for the backdrop camera
#[derive(Component)]
pub struct MainCamera;

/// Which page slot a decoration group belongs to
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum ShowcaseKind {
    Hero,
    Orbit,
    Skills,
    Contact,
}

/// Marker for the slowly tumbling hero particle cloud
#[derive(Component)]
struct HeroField;

/// Floating accent cube in the hero backdrop
#[derive(Component)]
struct Drifter {
    home: Vec3,
    seed: f32,
}

/// Spinning logo pivot in the orbit showcase
#[derive(Component)]
struct OrbitSpin {
    home: Vec3,
    speed: f32,
}

/// Rotating panel in the skills showcase
#[derive(Component)]
struct SkillPanel {
    phase: f32,
}

/// Breathing icosphere in the contact showcase
#[derive(Component)]
struct ContactOrb;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut showcases: ResMut<Showcases>,
) {
    // Backdrop camera looks down -Z at the z=0 plane the groups sit on
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });

    spawn_hero(&mut commands, &mut meshes, &mut materials, &mut showcases);
    spawn_orbit(&mut commands, &mut meshes, &mut materials, &mut showcases);
    spawn_skills(&mut commands, &mut meshes, &mut materials, &mut showcases);
    spawn_contact(&mut commands, &mut meshes, &mut materials, &mut showcases);
}

fn spawn_hero(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    showcases: &mut Showcases,
) {
    let field = particle_field(PARTICLE_COUNT, FIELD_EXTENT, FIELD_SEED);
    let Some(points) = showcases.hero.boundary.observe(field) else {
        return;
    };

    // One mesh and material shared by every particle
    let particle_mesh = meshes.add(Cuboid::new(0.05, 0.05, 0.05));
    let particle_material = materials.add(StandardMaterial {
        base_color: srgba(palette::PURPLE.with_alpha(220)),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands
        .spawn((Transform::default(), Visibility::Hidden, ShowcaseKind::Hero))
        .with_children(|root| {
            root.spawn((Transform::default(), Visibility::Inherited, HeroField))
                .with_children(|cloud| {
                    for p in &points {
                        cloud.spawn((
                            Mesh3d(particle_mesh.clone()),
                            MeshMaterial3d(particle_material.clone()),
                            Transform::from_xyz(p[0], p[1], p[2]),
                        ));
                    }
                });

            for (i, (position, color)) in DRIFTERS.iter().enumerate() {
                let home = Vec3::from_array(*position);
                root.spawn((
                    Mesh3d(meshes.add(Cuboid::new(0.5, 0.5, 0.5))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: srgba(color.with_alpha(90)),
                        emissive: glow(*color, 0.6),
                        unlit: true,
                        alpha_mode: AlphaMode::Blend,
                        ..default()
                    })),
                    Transform::from_translation(home),
                    Drifter {
                        home,
                        seed: i as f32 * 1.7,
                    },
                ));
            }
        });
}

fn spawn_orbit(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    showcases: &mut Showcases,
) {
    // One bad logo color fails the whole group
    let mut colors = Vec::with_capacity(ORBIT_LOGOS.len());
    for logo in &ORBIT_LOGOS {
        match showcases.orbit.boundary.observe(Rgba::from_hex(logo.color)) {
            Some(color) => colors.push(color),
            None => return,
        }
    }

    let sphere_mesh = meshes.add(Sphere::new(0.22));
    let ring_mesh = meshes.add(Torus {
        minor_radius: 0.02,
        major_radius: 0.55,
    });

    commands
        .spawn((Transform::default(), Visibility::Hidden, ShowcaseKind::Orbit))
        .with_children(|root| {
            for (logo, color) in ORBIT_LOGOS.iter().zip(colors) {
                let home = Vec3::from_array(logo.position);
                root.spawn((
                    Transform::from_translation(home),
                    Visibility::Inherited,
                    OrbitSpin {
                        home,
                        speed: logo.speed,
                    },
                ))
                .with_children(|pivot| {
                    pivot.spawn((
                        Mesh3d(sphere_mesh.clone()),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: srgb(color),
                            emissive: glow(color, 1.5),
                            unlit: true,
                            ..default()
                        })),
                        Transform::default(),
                    ));
                    // Flat ring turned to face the camera
                    pivot.spawn((
                        Mesh3d(ring_mesh.clone()),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: srgba(color.with_alpha(40)),
                            unlit: true,
                            alpha_mode: AlphaMode::Blend,
                            ..default()
                        })),
                        Transform::from_rotation(Quat::from_rotation_x(
                            std::f32::consts::FRAC_PI_2,
                        )),
                    ));
                });
            }
        });
}

fn spawn_skills(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    showcases: &mut Showcases,
) {
    let mut colors = Vec::with_capacity(SHOWCASE_PANELS.len());
    for panel in &SHOWCASE_PANELS {
        match showcases.skills.boundary.observe(Rgba::from_hex(panel.color)) {
            Some(color) => colors.push(color),
            None => return,
        }
    }

    let panel_mesh = meshes.add(Cuboid::new(1.6, 1.1, 0.06));

    commands
        .spawn((Transform::default(), Visibility::Hidden, ShowcaseKind::Skills))
        .with_children(|root| {
            for (i, (panel, color)) in SHOWCASE_PANELS.iter().zip(colors).enumerate() {
                root.spawn((
                    Mesh3d(panel_mesh.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: srgb(color),
                        metallic: 0.8,
                        perceptual_roughness: 0.2,
                        ..default()
                    })),
                    Transform::from_translation(Vec3::from_array(panel.position) * 0.9),
                    SkillPanel {
                        phase: i as f32 * 0.8,
                    },
                ));
            }

            for (position, color) in &PANEL_LIGHTS {
                root.spawn((
                    PointLight {
                        color: srgb(*color),
                        intensity: 300_000.0,
                        range: 12.0,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::from_translation(Vec3::from_array(*position)),
                ));
            }
        });
}

fn spawn_contact(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    showcases: &mut Showcases,
) {
    let orb = Sphere::new(1.2).mesh().ico(1);
    let Some(orb_mesh) = showcases.contact.boundary.observe(orb) else {
        return;
    };

    commands
        .spawn((
            Transform::default(),
            Visibility::Hidden,
            ShowcaseKind::Contact,
        ))
        .with_children(|root| {
            root.spawn((
                Mesh3d(meshes.add(orb_mesh)),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: srgba(palette::PINK.with_alpha(200)),
                    emissive: glow(palette::PINK, 1.2),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::default(),
                ContactOrb,
            ));
        });
}

/// Move each decoration group behind the page region reserved for it,
/// scaled so the group fills the region's height
fn align_showcases(
    showcases: Res<Showcases>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut roots: Query<(&ShowcaseKind, &mut Transform, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (kind, mut transform, mut visibility) in roots.iter_mut() {
        let slot = match kind {
            ShowcaseKind::Hero => &showcases.hero,
            ShowcaseKind::Orbit => &showcases.orbit,
            ShowcaseKind::Skills => &showcases.skills,
            ShowcaseKind::Contact => &showcases.contact,
        };

        let placed = slot
            .anchor
            .as_ref()
            .and_then(|anchor| anchor_to_world(camera, camera_transform, anchor));

        match placed {
            Some((center, world_height)) if world_height > f32::EPSILON => {
                let scale = (world_height / design_extent(*kind)).clamp(0.05, 20.0);
                transform.translation = center;
                transform.scale = Vec3::splat(scale);
                *visibility = Visibility::Visible;
            }
            _ => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

/// World-space height each group was modeled to occupy
const fn design_extent(kind: ShowcaseKind) -> f32 {
    match kind {
        ShowcaseKind::Hero => 8.0,
        ShowcaseKind::Orbit => 4.6,
        ShowcaseKind::Skills => 5.2,
        ShowcaseKind::Contact => 3.4,
    }
}

/// Resolve a window-space anchor to its center on the z=0 plane plus the
/// plane-space height the anchor covers
fn anchor_to_world(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    anchor: &ShowcaseAnchor,
) -> Option<(Vec3, f32)> {
    let half = Vec2::new(0.0, anchor.size.y * 0.5);
    let center = project_to_plane(camera, camera_transform, anchor.center)?;
    let top = project_to_plane(camera, camera_transform, anchor.center - half)?;
    let bottom = project_to_plane(camera, camera_transform, anchor.center + half)?;
    Some((center, top.distance(bottom)))
}

fn project_to_plane(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    point: Vec2,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, point).ok()?;
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Z))?;
    Some(ray.get_point(distance))
}

fn animate_hero_field(time: Res<Time>, mut fields: Query<&mut Transform, With<HeroField>>) {
    let t = time.elapsed_secs();
    for mut transform in fields.iter_mut() {
        transform.rotation = Quat::from_euler(EulerRot::XYZ, t * 0.05, t * 0.03, 0.0);
    }
}

fn animate_drifters(time: Res<Time>, mut drifters: Query<(&Drifter, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (drifter, mut transform) in drifters.iter_mut() {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            t * 0.5 + drifter.seed,
            t * 0.3 + drifter.seed,
            0.0,
        );
        transform.translation = drifter.home + Vec3::Y * float_offset(t + drifter.seed, 1.0, 0.5);
    }
}

fn animate_orbit_logos(time: Res<Time>, mut pivots: Query<(&OrbitSpin, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (spin, mut transform) in pivots.iter_mut() {
        transform.rotation = Quat::from_rotation_y(t * spin.speed * 0.5);
        transform.translation = spin.home + Vec3::Y * float_offset(t * spin.speed, 1.0, 0.2);
    }
}

fn animate_skill_panels(time: Res<Time>, mut panels: Query<(&SkillPanel, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (panel, mut transform) in panels.iter_mut() {
        transform.rotation = Quat::from_rotation_y(t * 0.2 + panel.phase);
    }
}

fn animate_contact_orb(time: Res<Time>, mut orbs: Query<&mut Transform, With<ContactOrb>>) {
    let t = time.elapsed_secs();
    for mut transform in orbs.iter_mut() {
        transform.rotation = Quat::from_euler(EulerRot::XYZ, t * 0.2, t * 0.3, 0.0);
        transform.scale = Vec3::splat(ORB_BREATH.between(t, 0.95, 1.08));
        transform.translation = Vec3::Y * float_offset(t, std::f32::consts::PI, 0.15);
    }
}

fn srgb(color: Rgba) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}

fn srgba(color: Rgba) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

fn glow(color: Rgba, intensity: f32) -> LinearRgba {
    srgb(color).to_linear() * intensity
}
