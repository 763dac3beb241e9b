//! # Actions
//!
//! Everything that can happen in EduApp becomes an `Action`.
//! User presses Enter on a topic? That's `Action::OpenTopic { .. }`.
//! The player timer fires? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O here; the event loop only looks at the
//! returned `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! The `Open*` actions are where entitlement is enforced: a locked node
//! redirects to the subscription screen, an empty node only sets a status
//! message, and a node that can't be found is treated the same as empty.

use log::{debug, info};

use crate::core::catalog::Availability;
use crate::core::exercise::ExerciseAttempt;
use crate::core::navigation::{PlaybackTarget, Screen, ScreenData, Tab};
use crate::core::plan::Plan;
use crate::core::player::Playback;
use crate::core::state::{App, Breadcrumb};

pub const EMPTY_CONTENT_MESSAGE: &str = "Nenhum conteúdo disponível ainda";
const CATALOG_INSTRUCTOR: &str = "Professor EduApp";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Session
    Login,
    Logout,
    Quit,

    // Navigation
    Navigate(Screen, Option<ScreenData>),
    Back,
    ChangeTab(Tab),
    ChangeSubscription(Plan),

    // Explanations catalog
    OpenClass(String),
    OpenDiscipline {
        class_id: String,
        discipline_id: String,
    },
    OpenTopic {
        class_id: String,
        discipline_id: String,
        topic_id: String,
    },
    OpenLesson {
        class_id: String,
        discipline_id: String,
        topic_id: String,
        lesson_id: String,
    },
    OpenExercise {
        class_id: String,
        discipline_id: String,
        topic_id: String,
        exercise_id: String,
    },

    // Courses
    OpenCourse(u32),
    PlayCourseLesson {
        course_id: u32,
        lesson_index: usize,
    },

    // Exercise / quiz (applies to the lesson quiz while it's open)
    SelectAnswer(usize),
    SubmitAnswer,
    NextQuestion,
    RestartExercise,

    // Player
    TogglePlayback,
    SkipPlayback(i32),
    SeekPlayback(u32),
    Tick,
    StartLessonQuiz,
    CloseLessonQuiz,

    // Messages
    OpenConversation(u32),
    SendMessage {
        conversation_id: u32,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if !matches!(action, Action::Tick) {
        debug!("update: {:?}", action);
    }

    match action {
        Action::Quit => return Effect::Quit,
        Action::Login => {
            app.nav.login();
            app.status_message = format!("Plano atual: {}", app.plan().label());
            info!("User logged in with plan {}", app.plan());
            reset_screen_state(app);
            return Effect::None;
        }
        _ if !app.nav.is_authenticated() => {
            debug!("Ignoring action while logged out");
            return Effect::None;
        }
        _ => {}
    }

    let before = app.nav.current_screen();

    match action {
        Action::Login | Action::Quit => {}
        Action::Logout => {
            app.nav.logout();
            app.status_message = String::from("Você saiu da sua conta");
            info!("User logged out");
        }
        Action::Navigate(target, data) => app.nav.navigate(target, data),
        Action::Back => app.nav.go_back(),
        Action::ChangeTab(tab) => app.nav.change_tab(tab),
        Action::ChangeSubscription(plan) => change_subscription(app, plan),

        Action::OpenClass(class_id) => open_class(app, class_id),
        Action::OpenDiscipline {
            class_id,
            discipline_id,
        } => open_discipline(app, class_id, discipline_id),
        Action::OpenTopic {
            class_id,
            discipline_id,
            topic_id,
        } => open_topic(app, class_id, discipline_id, topic_id),
        Action::OpenLesson {
            class_id,
            discipline_id,
            topic_id,
            lesson_id,
        } => open_lesson(app, &class_id, &discipline_id, &topic_id, &lesson_id),
        Action::OpenExercise {
            class_id,
            discipline_id,
            topic_id,
            exercise_id,
        } => open_exercise(app, class_id, discipline_id, topic_id, exercise_id),

        Action::OpenCourse(course_id) => {
            if app.courses.find(course_id).is_some() {
                app.breadcrumb.course_id = Some(course_id);
                app.nav
                    .navigate(Screen::CourseDetail, Some(ScreenData::CourseDetail { course_id }));
            } else {
                app.status_message = String::from("Curso não encontrado");
            }
        }
        Action::PlayCourseLesson {
            course_id,
            lesson_index,
        } => play_course_lesson(app, course_id, lesson_index),

        Action::SelectAnswer(option) => {
            if let Some(attempt) = active_attempt(app) {
                attempt.select(option);
            }
        }
        Action::SubmitAnswer => {
            if let Some(attempt) = active_attempt(app)
                && let Some(correct) = attempt.submit()
            {
                app.status_message = if correct {
                    String::from("Resposta correta!")
                } else {
                    String::from("Resposta incorreta")
                };
            }
        }
        Action::NextQuestion => {
            if let Some(attempt) = active_attempt(app) {
                attempt.next();
                if attempt.is_finished() {
                    let (correct, total) = (attempt.correct_count(), attempt.total());
                    app.status_message = format!("Você acertou {correct} de {total} questões");
                }
            }
        }
        Action::RestartExercise => {
            if let Some(attempt) = active_attempt(app) {
                attempt.restart();
            }
        }

        Action::TogglePlayback => {
            if before == Screen::VideoPlayer {
                app.playback.toggle();
            }
        }
        Action::SkipPlayback(delta) => {
            if before == Screen::VideoPlayer {
                app.playback.skip(delta);
            }
        }
        Action::SeekPlayback(secs) => {
            if before == Screen::VideoPlayer {
                app.playback.seek(secs);
            }
        }
        Action::Tick => {
            if before == Screen::VideoPlayer {
                app.playback.tick();
            }
        }
        Action::StartLessonQuiz => {
            if before == Screen::VideoPlayer {
                app.playback.pause();
                app.lesson_quiz = Some(ExerciseAttempt::new(app.courses.lesson_quiz.clone()));
            }
        }
        Action::CloseLessonQuiz => app.lesson_quiz = None,

        Action::OpenConversation(id) => {
            if !app.inbox.open(id) {
                app.status_message = String::from("Conversa não encontrada");
            }
        }
        Action::SendMessage {
            conversation_id,
            text,
        } => {
            if app.inbox.send(conversation_id, &text) {
                app.status_message = String::from("Mensagem enviada");
            }
        }
    }

    sync_screen_state(app, before);

    Effect::None
}

/// The attempt the exercise actions should drive: the player's quiz while
/// it's open, otherwise the exercise screen's attempt.
fn active_attempt(app: &mut App) -> Option<&mut ExerciseAttempt> {
    if app.nav.current_screen() == Screen::VideoPlayer {
        app.lesson_quiz.as_mut()
    } else if app.nav.current_screen() == Screen::Exercise {
        app.attempt.as_mut()
    } else {
        None
    }
}

fn reset_screen_state(app: &mut App) {
    app.attempt = None;
    app.lesson_quiz = None;
    app.playback = Playback::new(app.playback_duration);
}

/// Per-screen state is created on entry and dropped on exit.
fn sync_screen_state(app: &mut App, before: Screen) {
    let now = app.nav.current_screen();

    if now == Screen::Exercise {
        if before != Screen::Exercise || app.attempt.is_none() {
            app.attempt = match app.nav.screen_data() {
                Some(ScreenData::Exercise {
                    class_id,
                    discipline_id,
                    topic_id,
                    exercise_id,
                }) => app
                    .catalog
                    .find_exercise(class_id, discipline_id, topic_id, exercise_id)
                    .cloned()
                    .map(ExerciseAttempt::new),
                _ => None,
            };
        }
    } else {
        app.attempt = None;
    }

    if now == Screen::VideoPlayer {
        if before != Screen::VideoPlayer {
            app.playback = Playback::new(app.playback_duration);
            app.lesson_quiz = None;
        }
    } else if before == Screen::VideoPlayer {
        app.playback = Playback::new(app.playback_duration);
        app.lesson_quiz = None;
    }
}

fn redirect_to_subscription(app: &mut App, required: Plan) {
    app.status_message = format!("Requer plano {}", required.label());
    app.nav.navigate(Screen::Subscription, None);
}

fn change_subscription(app: &mut App, plan: Plan) {
    if plan == app.plan() {
        app.status_message = format!("Você já está no plano {}", plan.label());
        return;
    }
    app.nav.change_subscription(plan);
    app.status_message = format!("Plano alterado para {}", plan.label());
    info!("Subscription changed to {}", plan);
}

fn open_class(app: &mut App, class_id: String) {
    if app.catalog.find_class(&class_id).is_none() {
        app.status_message = String::from("Série não encontrada");
        return;
    }
    app.breadcrumb = Breadcrumb {
        class_id: Some(class_id.clone()),
        course_id: app.breadcrumb.course_id,
        ..Breadcrumb::default()
    };
    app.nav
        .navigate(Screen::Disciplines, Some(ScreenData::Disciplines { class_id }));
}

fn open_discipline(app: &mut App, class_id: String, discipline_id: String) {
    let plan = app.plan();
    let Some(discipline) = app.catalog.find_discipline(&class_id, &discipline_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    let lowest_plan = discipline.entry_plan();

    match discipline.availability(plan) {
        Availability::Unlocked => {
            app.breadcrumb.class_id = Some(class_id.clone());
            app.breadcrumb.discipline_id = Some(discipline_id.clone());
            app.breadcrumb.topic_id = None;
            app.nav.navigate(
                Screen::Topics,
                Some(ScreenData::Topics {
                    class_id,
                    discipline_id,
                }),
            );
        }
        Availability::Locked => redirect_to_subscription(app, lowest_plan),
        Availability::Empty => app.status_message = String::from(EMPTY_CONTENT_MESSAGE),
    }
}

fn open_topic(app: &mut App, class_id: String, discipline_id: String, topic_id: String) {
    let plan = app.plan();
    let Some(topic) = app.catalog.find_topic(&class_id, &discipline_id, &topic_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    let required = topic.required_plan;

    match topic.availability(plan) {
        Availability::Unlocked => {
            app.breadcrumb.class_id = Some(class_id.clone());
            app.breadcrumb.discipline_id = Some(discipline_id.clone());
            app.breadcrumb.topic_id = Some(topic_id.clone());
            app.nav.navigate(
                Screen::TopicDetail,
                Some(ScreenData::TopicDetail {
                    class_id,
                    discipline_id,
                    topic_id,
                }),
            );
        }
        Availability::Locked => redirect_to_subscription(app, required),
        Availability::Empty => app.status_message = String::from(EMPTY_CONTENT_MESSAGE),
    }
}

fn open_lesson(
    app: &mut App,
    class_id: &str,
    discipline_id: &str,
    topic_id: &str,
    lesson_id: &str,
) {
    let plan = app.plan();
    let Some(discipline) = app.catalog.find_discipline(class_id, discipline_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    let Some(topic) = discipline.find_topic(topic_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    if !topic.is_accessible(plan) {
        let required = topic.required_plan;
        redirect_to_subscription(app, required);
        return;
    }
    let Some(lesson) = topic.find_lesson(lesson_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };

    match lesson.availability(plan) {
        Availability::Locked => {
            let required = lesson.required_plan;
            redirect_to_subscription(app, required);
        }
        _ => {
            let target = PlaybackTarget {
                course_title: format!("{} - {}", discipline.name, topic.name),
                instructor: CATALOG_INSTRUCTOR.to_string(),
                lesson_title: lesson.title.clone(),
                duration: lesson.duration.clone(),
                free: lesson.required_plan == Plan::Free,
            };
            app.nav
                .navigate(Screen::VideoPlayer, Some(ScreenData::VideoPlayer(target)));
        }
    }
}

fn open_exercise(
    app: &mut App,
    class_id: String,
    discipline_id: String,
    topic_id: String,
    exercise_id: String,
) {
    let plan = app.plan();
    let Some(topic) = app.catalog.find_topic(&class_id, &discipline_id, &topic_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    if !topic.is_accessible(plan) {
        let required = topic.required_plan;
        redirect_to_subscription(app, required);
        return;
    }
    let Some(exercise) = topic.find_exercise(&exercise_id) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };

    match exercise.availability(plan) {
        Availability::Locked => {
            let required = exercise.required_plan;
            redirect_to_subscription(app, required);
        }
        _ => app.nav.navigate(
            Screen::Exercise,
            Some(ScreenData::Exercise {
                class_id,
                discipline_id,
                topic_id,
                exercise_id,
            }),
        ),
    }
}

fn play_course_lesson(app: &mut App, course_id: u32, lesson_index: usize) {
    let Some(course) = app.courses.find(course_id) else {
        app.status_message = String::from("Curso não encontrado");
        return;
    };
    let Some(lesson) = app.courses.syllabus.get(lesson_index) else {
        app.status_message = String::from(EMPTY_CONTENT_MESSAGE);
        return;
    };
    if !lesson.is_playable() {
        app.status_message = String::from("Esta aula ainda não está disponível");
        return;
    }
    let target = PlaybackTarget {
        course_title: course.title.clone(),
        instructor: course.instructor.clone(),
        lesson_title: lesson.title.clone(),
        duration: lesson.duration.clone(),
        free: lesson.free,
    };
    app.nav
        .navigate(Screen::VideoPlayer, Some(ScreenData::VideoPlayer(target)));
}
