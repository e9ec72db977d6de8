use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Courses are scanned by subject for queries and integrity checks
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_subject")
                    .table(Courses::Table)
                    .col(Courses::Subject)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_subject_level")
                    .table(Courses::Table)
                    .col(Courses::Subject)
                    .col(Courses::Level)
                    .to_owned(),
            )
            .await?;

        // The enroll-group matcher probes (course, semester, key); at most
        // one group may hold a given key within a course and semester
        manager
            .create_index(
                Index::create()
                    .name("idx_enroll_groups_matching")
                    .table(EnrollGroups::Table)
                    .unique()
                    .col(EnrollGroups::CourseId)
                    .col(EnrollGroups::Semester)
                    .col(EnrollGroups::MatchingKind)
                    .col(EnrollGroups::MatchingKey)
                    .to_owned(),
            )
            .await?;

        // The combined-group resolver loads one semester at a time
        manager
            .create_index(
                Index::create()
                    .name("idx_enroll_groups_semester")
                    .table(EnrollGroups::Table)
                    .col(EnrollGroups::Semester)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enroll_groups_combined_group_id")
                    .table(EnrollGroups::Table)
                    .col(EnrollGroups::CombinedGroupId)
                    .to_owned(),
            )
            .await?;

        // Section matching probes (group, section number); section numbers
        // are unique within an enroll group
        manager
            .create_index(
                Index::create()
                    .name("idx_class_sections_group_number")
                    .table(ClassSections::Table)
                    .unique()
                    .col(ClassSections::EnrollGroupId)
                    .col(ClassSections::SectionNumber)
                    .to_owned(),
            )
            .await?;

        // Meetings are rebuilt per section on every import
        manager
            .create_index(
                Index::create()
                    .name("idx_meetings_class_section_id")
                    .table(Meetings::Table)
                    .col(Meetings::ClassSectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requirement_nodes_requirement_id")
                    .table(RequirementNodes::Table)
                    .col(RequirementNodes::RequirementId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_node_courses_course_id")
                    .table(NodeCourses::Table)
                    .col(NodeCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_node_courses_course_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_requirement_nodes_requirement_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_meetings_class_section_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_class_sections_group_number")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enroll_groups_combined_group_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enroll_groups_semester").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enroll_groups_matching").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_subject_level").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_subject").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Subject,
    Level,
}

#[derive(Iden)]
enum EnrollGroups {
    Table,
    CourseId,
    Semester,
    MatchingKind,
    MatchingKey,
    CombinedGroupId,
}

#[derive(Iden)]
enum ClassSections {
    Table,
    EnrollGroupId,
    SectionNumber,
}

#[derive(Iden)]
enum Meetings {
    Table,
    ClassSectionId,
}

#[derive(Iden)]
enum RequirementNodes {
    Table,
    RequirementId,
}

#[derive(Iden)]
enum NodeCourses {
    Table,
    CourseId,
}
