use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create subjects table
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Value)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Description).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::DescriptionFormal)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::Number).string().not_null())
                    .col(ColumnDef::new(Courses::Level).integer().not_null())
                    .col(ColumnDef::new(Courses::TitleShort).string().not_null())
                    .col(ColumnDef::new(Courses::TitleLong).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(
                        ColumnDef::new(Courses::EnrollmentPriority)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::ForbiddenOverlaps).text().not_null())
                    .col(ColumnDef::new(Courses::Prereq).text().not_null())
                    .col(ColumnDef::new(Courses::Coreq).text().not_null())
                    .col(ColumnDef::new(Courses::Fee).text().not_null())
                    .col(ColumnDef::new(Courses::AcadCareer).string().not_null())
                    .col(ColumnDef::new(Courses::AcadGroup).string().not_null())
                    .col(
                        ColumnDef::new(Courses::LastOfferedSemester)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::LastOfferedYear)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_attributes table
        manager
            .create_table(
                Table::create()
                    .table(CourseAttributes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseAttributes::CourseId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseAttributes::AttributeValue)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseAttributes::AttributeType).string())
                    .primary_key(
                        Index::create()
                            .col(CourseAttributes::CourseId)
                            .col(CourseAttributes::AttributeValue),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_attributes-course_id")
                            .from(CourseAttributes::Table, CourseAttributes::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create combined_groups table
        manager
            .create_table(
                Table::create()
                    .table(CombinedGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CombinedGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CombinedGroups::Semester).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create enroll_groups table
        manager
            .create_table(
                Table::create()
                    .table(EnrollGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnrollGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EnrollGroups::CourseId).string().not_null())
                    .col(ColumnDef::new(EnrollGroups::Semester).string().not_null())
                    .col(ColumnDef::new(EnrollGroups::Topic).string())
                    .col(
                        ColumnDef::new(EnrollGroups::MatchingKind)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EnrollGroups::MatchingKey).string().not_null())
                    .col(ColumnDef::new(EnrollGroups::CreditsMinimum).float())
                    .col(ColumnDef::new(EnrollGroups::CreditsMaximum).float())
                    .col(ColumnDef::new(EnrollGroups::GradingBasis).string())
                    .col(ColumnDef::new(EnrollGroups::SessionCode).string())
                    .col(ColumnDef::new(EnrollGroups::CombinationHints).json())
                    .col(ColumnDef::new(EnrollGroups::CombinedGroupId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enroll_groups-course_id")
                            .from(EnrollGroups::Table, EnrollGroups::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enroll_groups-combined_group_id")
                            .from(EnrollGroups::Table, EnrollGroups::CombinedGroupId)
                            .to(CombinedGroups::Table, CombinedGroups::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create class_sections table
        manager
            .create_table(
                Table::create()
                    .table(ClassSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSections::EnrollGroupId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSections::SectionNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSections::ClassNbr).integer())
                    .col(ColumnDef::new(ClassSections::Semester).string().not_null())
                    .col(
                        ColumnDef::new(ClassSections::SectionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSections::Campus).string())
                    .col(ColumnDef::new(ClassSections::Location).string())
                    .col(ColumnDef::new(ClassSections::StartDate).date())
                    .col(ColumnDef::new(ClassSections::EndDate).date())
                    .col(ColumnDef::new(ClassSections::AddConsent).string())
                    .col(ColumnDef::new(ClassSections::IsComponentGraded).boolean())
                    .col(ColumnDef::new(ClassSections::InstructionMode).string())
                    .col(ColumnDef::new(ClassSections::SectionTopic).text())
                    .col(ColumnDef::new(ClassSections::OpenStatus).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_sections-enroll_group_id")
                            .from(ClassSections::Table, ClassSections::EnrollGroupId)
                            .to(EnrollGroups::Table, EnrollGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create meetings table
        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meetings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Meetings::ClassSectionId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Meetings::TimeStart).string())
                    .col(ColumnDef::new(Meetings::TimeEnd).string())
                    .col(ColumnDef::new(Meetings::Pattern).string())
                    .col(ColumnDef::new(Meetings::StartDate).date())
                    .col(ColumnDef::new(Meetings::EndDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-meetings-class_section_id")
                            .from(Meetings::Table, Meetings::ClassSectionId)
                            .to(ClassSections::Table, ClassSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Netid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::FirstName).string())
                    .col(ColumnDef::new(Instructors::MiddleName).string())
                    .col(ColumnDef::new(Instructors::LastName).string())
                    .to_owned(),
            )
            .await?;

        // Create meeting_instructors junction table
        manager
            .create_table(
                Table::create()
                    .table(MeetingInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MeetingInstructors::MeetingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeetingInstructors::InstructorNetid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeetingInstructors::AssignSeq)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(MeetingInstructors::MeetingId)
                            .col(MeetingInstructors::InstructorNetid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-meeting_instructors-meeting_id")
                            .from(MeetingInstructors::Table, MeetingInstructors::MeetingId)
                            .to(Meetings::Table, Meetings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-meeting_instructors-instructor_netid")
                            .from(
                                MeetingInstructors::Table,
                                MeetingInstructors::InstructorNetid,
                            )
                            .to(Instructors::Table, Instructors::Netid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create programs table
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Programs::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Programs::Name).string().not_null())
                    .col(ColumnDef::new(Programs::ProgramType).string().not_null())
                    .col(
                        ColumnDef::new(Programs::YearDependent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Programs::MajorDependent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Programs::CollegeDependent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Programs::ConcentrationDependent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Programs::OnboardingCourses).json())
                    .to_owned(),
            )
            .await?;

        // Create requirements table
        manager
            .create_table(
                Table::create()
                    .table(Requirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requirements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requirements::ProgramId).string().not_null())
                    .col(ColumnDef::new(Requirements::Name).string().not_null())
                    .col(ColumnDef::new(Requirements::UiType).string().not_null())
                    .col(ColumnDef::new(Requirements::Description).json())
                    .col(ColumnDef::new(Requirements::RootNodeId).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirements-program_id")
                            .from(Requirements::Table, Requirements::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create requirement_nodes table
        manager
            .create_table(
                Table::create()
                    .table(RequirementNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequirementNodes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RequirementNodes::RequirementId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequirementNodes::NodeType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RequirementNodes::Title).string())
                    .col(
                        ColumnDef::new(RequirementNodes::PickCount)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirement_nodes-requirement_id")
                            .from(RequirementNodes::Table, RequirementNodes::RequirementId)
                            .to(Requirements::Table, Requirements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create node_children junction table
        manager
            .create_table(
                Table::create()
                    .table(NodeChildren::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NodeChildren::ParentNodeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NodeChildren::ChildNodeId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NodeChildren::Position).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(NodeChildren::ParentNodeId)
                            .col(NodeChildren::ChildNodeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-node_children-parent_node_id")
                            .from(NodeChildren::Table, NodeChildren::ParentNodeId)
                            .to(RequirementNodes::Table, RequirementNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create node_courses table
        manager
            .create_table(
                Table::create()
                    .table(NodeCourses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NodeCourses::NodeId).string().not_null())
                    .col(ColumnDef::new(NodeCourses::CourseId).string().not_null())
                    .col(ColumnDef::new(NodeCourses::Topic).string().not_null())
                    .col(ColumnDef::new(NodeCourses::CombinedGroupId).integer())
                    .col(ColumnDef::new(NodeCourses::Comment).text())
                    .col(
                        ColumnDef::new(NodeCourses::Recommended)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .primary_key(
                        Index::create()
                            .col(NodeCourses::NodeId)
                            .col(NodeCourses::CourseId)
                            .col(NodeCourses::Topic),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-node_courses-node_id")
                            .from(NodeCourses::Table, NodeCourses::NodeId)
                            .to(RequirementNodes::Table, RequirementNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-node_courses-course_id")
                            .from(NodeCourses::Table, NodeCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create requirement_domains table
        manager
            .create_table(
                Table::create()
                    .table(RequirementDomains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequirementDomains::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RequirementDomains::ProgramId)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirement_domains-program_id")
                            .from(RequirementDomains::Table, RequirementDomains::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create requirement_domain_memberships junction table
        manager
            .create_table(
                Table::create()
                    .table(RequirementDomainMemberships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequirementDomainMemberships::DomainId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequirementDomainMemberships::RequirementId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RequirementDomainMemberships::DomainId)
                            .col(RequirementDomainMemberships::RequirementId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirement_domain_memberships-domain_id")
                            .from(
                                RequirementDomainMemberships::Table,
                                RequirementDomainMemberships::DomainId,
                            )
                            .to(RequirementDomains::Table, RequirementDomains::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirement_domain_memberships-requirement_id")
                            .from(
                                RequirementDomainMemberships::Table,
                                RequirementDomainMemberships::RequirementId,
                            )
                            .to(Requirements::Table, Requirements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create colleges table
        manager
            .create_table(
                Table::create()
                    .table(Colleges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Colleges::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Colleges::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create college_programs junction table
        manager
            .create_table(
                Table::create()
                    .table(CollegePrograms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollegePrograms::CollegeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollegePrograms::ProgramId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CollegePrograms::CollegeId)
                            .col(CollegePrograms::ProgramId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-college_programs-college_id")
                            .from(CollegePrograms::Table, CollegePrograms::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-college_programs-program_id")
                            .from(CollegePrograms::Table, CollegePrograms::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create college_subjects junction table
        manager
            .create_table(
                Table::create()
                    .table(CollegeSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollegeSubjects::CollegeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollegeSubjects::SubjectId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CollegeSubjects::CollegeId)
                            .col(CollegeSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-college_subjects-college_id")
                            .from(CollegeSubjects::Table, CollegeSubjects::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-college_subjects-subject_id")
                            .from(CollegeSubjects::Table, CollegeSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Value)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CollegeSubjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CollegePrograms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Colleges::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(RequirementDomainMemberships::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RequirementDomains::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(NodeCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(NodeChildren::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RequirementNodes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Requirements::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MeetingInstructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClassSections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EnrollGroups::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CombinedGroups::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseAttributes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Subjects {
    Table,
    Value,
    Description,
    DescriptionFormal,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Subject,
    Number,
    Level,
    TitleShort,
    TitleLong,
    Description,
    EnrollmentPriority,
    ForbiddenOverlaps,
    Prereq,
    Coreq,
    Fee,
    AcadCareer,
    AcadGroup,
    LastOfferedSemester,
    LastOfferedYear,
}

#[derive(Iden)]
enum CourseAttributes {
    Table,
    CourseId,
    AttributeValue,
    AttributeType,
}

#[derive(Iden)]
enum CombinedGroups {
    Table,
    Id,
    Semester,
}

#[derive(Iden)]
enum EnrollGroups {
    Table,
    Id,
    CourseId,
    Semester,
    Topic,
    MatchingKind,
    MatchingKey,
    CreditsMinimum,
    CreditsMaximum,
    GradingBasis,
    SessionCode,
    CombinationHints,
    CombinedGroupId,
}

#[derive(Iden)]
enum ClassSections {
    Table,
    Id,
    EnrollGroupId,
    SectionNumber,
    ClassNbr,
    Semester,
    SectionType,
    Campus,
    Location,
    StartDate,
    EndDate,
    AddConsent,
    IsComponentGraded,
    InstructionMode,
    SectionTopic,
    OpenStatus,
}

#[derive(Iden)]
enum Meetings {
    Table,
    Id,
    ClassSectionId,
    TimeStart,
    TimeEnd,
    Pattern,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Instructors {
    Table,
    Netid,
    FirstName,
    MiddleName,
    LastName,
}

#[derive(Iden)]
enum MeetingInstructors {
    Table,
    MeetingId,
    InstructorNetid,
    AssignSeq,
}

#[derive(Iden)]
enum Programs {
    Table,
    Id,
    Name,
    ProgramType,
    YearDependent,
    MajorDependent,
    CollegeDependent,
    ConcentrationDependent,
    OnboardingCourses,
}

#[derive(Iden)]
enum Requirements {
    Table,
    Id,
    ProgramId,
    Name,
    UiType,
    Description,
    RootNodeId,
}

#[derive(Iden)]
enum RequirementNodes {
    Table,
    Id,
    RequirementId,
    NodeType,
    Title,
    PickCount,
}

#[derive(Iden)]
enum NodeChildren {
    Table,
    ParentNodeId,
    ChildNodeId,
    Position,
}

#[derive(Iden)]
enum NodeCourses {
    Table,
    NodeId,
    CourseId,
    Topic,
    CombinedGroupId,
    Comment,
    Recommended,
}

#[derive(Iden)]
enum RequirementDomains {
    Table,
    Id,
    ProgramId,
}

#[derive(Iden)]
enum RequirementDomainMemberships {
    Table,
    DomainId,
    RequirementId,
}

#[derive(Iden)]
enum Colleges {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum CollegePrograms {
    Table,
    CollegeId,
    ProgramId,
}

#[derive(Iden)]
enum CollegeSubjects {
    Table,
    CollegeId,
    SubjectId,
}
