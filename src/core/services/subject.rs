use crate::core::models::question::Question;
use crate::core::ports::repository::{QuestionDao, Store};
use crate::error::Error;
use crate::response::{QuestionDto, SubjectDto};
use std::collections::BTreeMap;

/// Groups the joined question rows under their subjects. Subjects come out
/// ordered by id, questions inside a subject keep the query order (question id).
fn group_by_subject(questions: Vec<Question>) -> Vec<SubjectDto> {
    let mut subjects: BTreeMap<i64, SubjectDto> = BTreeMap::new();
    for mut question in questions {
        let Some(subject) = question.subject.take() else {
            continue;
        };
        subjects
            .entry(subject.id)
            .or_insert_with(|| SubjectDto {
                id: subject.id,
                label: subject.label,
                questions: Vec::new(),
            })
            .questions
            .push(QuestionDto::from(question));
    }
    subjects.into_values().collect()
}

pub async fn find_all_subjects_and_questions<S>(store: &mut S) -> Result<Vec<SubjectDto>, Error>
where
    S: Store,
{
    let questions = QuestionDao::find_all_questions_and_subjects(store).await?;
    Ok(group_by_subject(questions))
}
